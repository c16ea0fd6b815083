//! # Erros de validação do dicionário
//!
//! A ausência de casamento **não** é erro: o extrator sinaliza "nada
//! encontrado" com uma sequência vazia e `delete` de um verbete inexistente
//! devolve `false`. O único insumo realmente mal formado é a palavra-chave
//! vazia, que rejeitamos na inserção — aceitá-la exigiria tratar a raiz como
//! terminal e toda varredura produziria casamentos de comprimento zero.

use thiserror::Error;

/// Erros possíveis ao alimentar o dicionário.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrieError {
    /// Palavra-chave vazia passada para `insert`. A raiz nunca é terminal,
    /// então o verbete de comprimento zero não tem representação na árvore.
    #[error("palavra-chave vazia não pode ser inserida no dicionário")]
    EmptyKeyword,
}
