//! # Carregador de dicionários em texto
//!
//! Formato orientado a linhas: cada linha é `verbete<SEP>rótulo` ou apenas
//! `verbete` (que então é o próprio rótulo). O separador é configurável
//! (padrão: tabulação), linhas em branco são ignoradas e campos além do
//! segundo são descartados. O parsing é genérico sobre [`BufRead`] para que
//! os testes usem um `Cursor` em vez de tocar o disco.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use kwex_core::{KeywordTrie, TrieError};
use thiserror::Error;

/// Erros do carregador — note que linha malformada "demais campos" não é um
/// deles; só E/S e verbete vazio interrompem a carga.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("falha de E/S ao ler o dicionário")]
    Io(#[from] std::io::Error),
    #[error("verbete inválido na linha {line} do dicionário")]
    BadKeyword {
        line: usize,
        #[source]
        source: TrieError,
    },
}

/// Carrega um dicionário de qualquer leitor bufferizado para dentro da trie.
///
/// Devolve o número de linhas não vazias processadas (reinserções contam,
/// então o valor pode exceder `trie.len()`).
pub fn load_into<R: BufRead>(
    trie: &mut KeywordTrie,
    reader: R,
    sep: &str,
) -> Result<usize, LoadError> {
    let mut loaded = 0;
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split(sep);
        // split sempre produz ao menos um campo para linha não vazia
        let keyword = fields.next().unwrap_or_default();
        let label = fields.next();
        trie.insert(keyword, label)
            .map_err(|source| LoadError::BadKeyword { line: idx + 1, source })?;
        loaded += 1;
    }
    Ok(loaded)
}

/// Abre o arquivo e delega para [`load_into`].
pub fn load_path(trie: &mut KeywordTrie, path: &Path, sep: &str) -> Result<usize, LoadError> {
    let file = File::open(path)?;
    load_into(trie, BufReader::new(file), sep)
}
