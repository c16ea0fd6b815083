//! # Ocorrências — o triplo `(start, end, label)`
//!
//! Toda ocorrência reportada pelo extrator é um intervalo **semiaberto** de
//! índices de caractere (Unicode scalar values, não bytes!) mais o rótulo do
//! verbete que casou. Trabalhar em índices de caractere mantém os offsets
//! estáveis para textos em qualquer escrita (chinês, português, emoji),
//! exatamente como o consumidor do anotador espera recebê-los.

use serde::{Deserialize, Serialize};

/// Uma ocorrência de palavra-chave no texto analisado.
///
/// # Exemplo
/// No texto `"我住在苏州"`, o verbete `"苏州"` com rótulo `"GPE"` produz:
/// `KeywordMatch { start: 3, end: 5, label: "GPE" }`
/// (índices de caractere, fim exclusivo).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordMatch {
    /// Índice do primeiro caractere da ocorrência (inclusivo)
    pub start: usize,
    /// Índice logo após o último caractere (exclusivo)
    pub end: usize,
    /// Rótulo associado ao verbete (ex: "GPE", "ORG", "PER")
    pub label: String,
}

impl KeywordMatch {
    /// Quantidade de caracteres cobertos pela ocorrência.
    ///
    /// Com `ignore_whitespace` ativo o intervalo pode cobrir espaços do texto
    /// que não existem no verbete, então `len()` pode exceder o tamanho da
    /// palavra-chave original.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Recorta a fatia do texto original coberta pela ocorrência.
    ///
    /// Recebe o texto como caracteres já coletados porque o extrator também
    /// trabalha nessa representação.
    pub fn surface(&self, chars: &[char]) -> String {
        chars[self.start..self.end].iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_por_indices_de_caractere() {
        let chars: Vec<char> = "我住在苏州".chars().collect();
        let m = KeywordMatch { start: 3, end: 5, label: "GPE".to_string() };
        assert_eq!(m.surface(&chars), "苏州");
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn test_serializa_como_json() {
        let m = KeywordMatch { start: 6, end: 8, label: "GPE".to_string() };
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"{"start":6,"end":8,"label":"GPE"}"#);
        let back: KeywordMatch = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
