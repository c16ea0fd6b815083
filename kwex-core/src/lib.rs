//! # kwex-core — Extração de Palavras-Chave por Dicionário
//!
//! Este crate implementa um reconhecedor de entidades dirigido por dicionário:
//! dado um conjunto de pares `(verbete, rótulo)`, ele varre um texto arbitrário
//! e reporta cada ocorrência como um triplo `(start, end, label)`, resolvendo
//! sobreposições com a regra determinística do **casamento mais longo**. É uma
//! primitiva de anotação para uso embarcado/offline (marcar topônimos,
//! organizações, pessoas), não um serviço de rede.
//!
//! ## Arquitetura
//!
//! Um único componente — a trie de palavras-chave — com três algoritmos
//! cooperando sobre a mesma estrutura:
//!
//! 1. **Inserção** ([`trie`]): constrói/estende caminhos da trie a partir dos
//!    verbetes do dicionário, com prefixos compartilhados.
//! 2. **Remoção** ([`trie`]): apaga um verbete e poda os nós que ficaram
//!    mortos, preservando prefixos ainda usados por outros verbetes.
//! 3. **Varredura** ([`extract`]): percorre o texto uma vez, da esquerda para
//!    a direita, estendendo gulosa e maximamente cada casamento e saltando
//!    para depois dele (resultados sem sobreposição).
//!
//! Todos os índices são de **caractere** (Unicode scalar), nunca de byte.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use kwex_core::KeywordTrie;
//!
//! // 1. Monta o dicionário
//! let mut trie = KeywordTrie::new();
//! trie.insert_pairs([
//!     ("苏州", "GPE"),
//!     ("苏大", "ORG"),
//!     ("苏州大学", "ORG"),
//! ]).unwrap();
//!
//! // 2. Varre o texto
//! let text = "我住在江苏省苏州市苏州大学333号,苏州大的小明";
//! for m in trie.extract(text) {
//!     println!("[{}, {}) {}", m.start, m.end, m.label);
//! }
//! // [6, 8) GPE — 苏州
//! // [9, 13) ORG — 苏州大学 (o mais longo vence, "苏州" não é reportado)
//! // [18, 20) GPE
//! ```
//!
//! ## Módulos
//!
//! - [`trie`]: o modelo de nós e as operações de dicionário.
//! - [`extract`]: a varredura de casamento mais longo e suas variantes
//!   (preguiçosa e em lote).
//! - [`span`]: o tipo de ocorrência [`KeywordMatch`].
//! - [`error`]: validação de entrada ([`TrieError`]).
//!
//! A mutação não é sincronizada: um escritor por vez, sem leitores durante a
//! escrita, é responsabilidade de quem integra. Varreduras simultâneas sobre
//! uma trie não mutada são seguras (ver [`KeywordTrie::extract_batch`]).

pub mod error;
pub mod extract;
pub mod span;
pub mod trie;

pub use error::TrieError;
pub use extract::ExtractIter;
pub use span::KeywordMatch;
pub use trie::KeywordTrie;
