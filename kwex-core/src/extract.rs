//! # Varredura — casamento mais longo, sem sobreposição
//!
//! O extrator percorre o texto uma única vez, da esquerda para a direita. Em
//! cada posição de partida ele desce a trie consumindo caracteres e lembra o
//! **último** nó terminal visitado: um verbete mais longo no mesmo caminho
//! sempre sobrescreve um mais curto ("苏州大学" vence "苏州"). Ao reportar
//! uma ocorrência, a varredura salta para logo depois dela, garantindo que
//! nenhum par de ocorrências se sobreponha.
//!
//! Caracteres fora do dicionário custam exatamente um avanço de posição, e a
//! descida por posição é limitada pelo verbete mais longo — o custo total é
//! O(n · L) para texto de tamanho n e verbete máximo L.
//!
//! ## Espaços transparentes
//!
//! Com `ignore_whitespace` ativo, o caractere `' '` do texto é consumido sem
//! mover o ponteiro da trie. O verbete `"a-b"` casa `"a -  b"`, e o
//! intervalo reportado cobre os espaços pulados, porque `start`/`end` são
//! sempre índices reais do texto de entrada.

use rayon::prelude::*;

use crate::span::KeywordMatch;
use crate::trie::KeywordTrie;

impl KeywordTrie {
    /// Casa um único verbete a partir de `start`.
    ///
    /// Devolve `(próxima posição de varredura, comprimento casado, rótulo)`:
    /// sem terminal algum no caminho, `(start + 1, 0, None)`; com terminal
    /// visto por último no índice `idx`, `(idx + 1, idx + 1 - start, rótulo)`.
    fn match_from<'a>(&'a self, chars: &[char], start: usize) -> (usize, usize, Option<&'a str>) {
        let mut node = &self.root;
        let mut best_end = None;
        let mut best_label = None;

        for (i, &ch) in chars.iter().enumerate().skip(start) {
            if ch == ' ' && self.ignore_whitespace {
                continue;
            }
            let Some(child) = node.children.get(&ch) else {
                break;
            };
            node = child;
            if let Some(label) = &node.label {
                best_end = Some(i);
                best_label = Some(label.as_str());
            }
        }

        match best_end {
            Some(idx) => (idx + 1, idx + 1 - start, best_label),
            None => (start + 1, 0, None),
        }
    }

    /// Extrai todas as ocorrências do texto, em ordem, sem sobreposição.
    ///
    /// # Exemplo
    /// ```rust
    /// use kwex_core::KeywordTrie;
    ///
    /// let mut trie = KeywordTrie::new();
    /// trie.insert_pairs([("苏州", "GPE"), ("苏州大学", "ORG")]).unwrap();
    ///
    /// let matches = trie.extract("苏州大学在苏州");
    /// assert_eq!(matches.len(), 2);
    /// assert_eq!(matches[0].label, "ORG"); // o verbete mais longo vence
    /// assert_eq!((matches[0].start, matches[0].end), (0, 4));
    /// ```
    pub fn extract(&self, text: &str) -> Vec<KeywordMatch> {
        self.extract_iter(text).collect()
    }

    /// Variante preguiçosa de [`extract`](Self::extract): produz as mesmas
    /// ocorrências uma a uma, sem buffer intermediário.
    ///
    /// O iterador congela os caracteres do texto na criação e toma a trie
    /// emprestada, então o dicionário não pode ser mutado no meio de uma
    /// varredura — o borrow checker transforma essa regra em erro de
    /// compilação em vez de comportamento indefinido.
    pub fn extract_iter(&self, text: &str) -> ExtractIter<'_> {
        ExtractIter {
            trie: self,
            chars: text.chars().collect(),
            pos: 0,
        }
    }

    /// Extrai ocorrências de vários textos em paralelo.
    ///
    /// A varredura é somente leitura, então compartilhar `&self` entre os
    /// workers do rayon é seguro; cada texto produz seu próprio vetor, na
    /// mesma ordem da entrada.
    pub fn extract_batch(&self, texts: &[&str]) -> Vec<Vec<KeywordMatch>> {
        texts.par_iter().map(|text| self.extract(text)).collect()
    }
}

/// Iterador de ocorrências devolvido por [`KeywordTrie::extract_iter`].
pub struct ExtractIter<'a> {
    trie: &'a KeywordTrie,
    chars: Vec<char>,
    pos: usize,
}

impl ExtractIter<'_> {
    /// Caracteres do texto congelados pelo iterador, úteis para recortar a
    /// superfície de cada ocorrência com [`KeywordMatch::surface`].
    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

impl Iterator for ExtractIter<'_> {
    type Item = KeywordMatch;

    fn next(&mut self) -> Option<KeywordMatch> {
        while self.pos < self.chars.len() {
            let (next_pos, len, label) = self.trie.match_from(&self.chars, self.pos);
            self.pos = next_pos;
            if let Some(label) = label {
                return Some(KeywordMatch {
                    start: next_pos - len,
                    end: next_pos,
                    label: label.to_string(),
                });
            }
            // Posição sem verbete: avançou um caractere, segue a varredura
        }
        None
    }
}
