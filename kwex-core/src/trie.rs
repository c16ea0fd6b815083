//! # Trie de palavras-chave — inserção, remoção e consultas
//!
//! A estrutura central do sistema: uma árvore de prefixos onde cada caminho a
//! partir da raiz soletra um verbete do dicionário. Dois verbetes que
//! compartilham prefixo ("苏州" e "苏州大学") compartilham o caminho do
//! prefixo — essa é toda a razão de ser da estrutura.
//!
//! ## Modelo de dados
//!
//! Cada [`TrieNode`] é dono exclusivo de seus filhos (`HashMap<char, TrieNode>`);
//! não há arestas de retorno nem compartilhamento de nós. A marca de término
//! de verbete é o campo `label`: um nó com rótulo encerra uma palavra-chave,
//! podendo ao mesmo tempo continuar rumo a verbetes mais longos.
//!
//! A posse exclusiva importa na **remoção**: podar um ramo morto é apenas
//! remover a aresta no pai, e o borrow checker garante que ninguém mais
//! enxergava aquele sub-ramo.

use std::collections::HashMap;

use crate::error::TrieError;

/// Um nó da trie: filhos indexados por caractere + rótulo terminal opcional.
#[derive(Debug, Clone, Default)]
pub(crate) struct TrieNode {
    /// Arestas de saída, uma por caractere distinto
    pub(crate) children: HashMap<char, TrieNode>,
    /// `Some(rótulo)` quando um verbete termina neste nó
    pub(crate) label: Option<String>,
}

impl TrieNode {
    /// Nó morto: sem filhos e sem rótulo. Candidato à poda após uma remoção.
    fn is_dead(&self) -> bool {
        self.children.is_empty() && self.label.is_none()
    }
}

/// Dicionário de palavras-chave sobre uma trie de prefixos.
///
/// Mantém o invariante `count == número de nós com rótulo`: após qualquer
/// operação pública, toda folha da árvore ou é terminal ou alcança um
/// terminal — nós mortos só existem transitoriamente durante a poda.
///
/// # Exemplo
/// ```rust
/// use kwex_core::KeywordTrie;
///
/// let mut trie = KeywordTrie::new();
/// trie.insert("苏州", Some("GPE")).unwrap();
/// trie.insert("苏州大学", Some("ORG")).unwrap();
///
/// assert_eq!(trie.len(), 2);
/// assert_eq!(trie.get_label("苏州"), Some("GPE"));
/// assert!(trie.delete("苏州"));
/// assert!(trie.contains("苏州大学"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct KeywordTrie {
    pub(crate) root: TrieNode,
    /// Número de verbetes distintos atualmente terminais na árvore
    count: usize,
    /// Flag de varredura fixada na construção: espaços do texto de entrada
    /// são transparentes para o casamento (ver módulo `extract`)
    pub(crate) ignore_whitespace: bool,
}

impl KeywordTrie {
    /// Cria um dicionário vazio com a configuração padrão
    /// (`ignore_whitespace = false`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Cria um dicionário vazio escolhendo o tratamento de espaços.
    ///
    /// Com `ignore_whitespace = true`, o caractere `' '` do **texto de
    /// entrada** é pulado durante a varredura sem avançar o ponteiro da trie,
    /// permitindo que o verbete `"a-b"` case `"a -  b"`. A assimetria é
    /// proposital: espaços armazenados **dentro de um verbete** continuam
    /// sendo arestas comuns e nunca casam com espaços pulados da entrada.
    pub fn with_ignore_whitespace(ignore_whitespace: bool) -> Self {
        Self {
            ignore_whitespace,
            ..Self::default()
        }
    }

    /// Número de verbetes distintos no dicionário.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Indica se a varredura trata espaços da entrada como transparentes.
    pub fn ignores_whitespace(&self) -> bool {
        self.ignore_whitespace
    }

    /// Insere um verbete, criando nós sob demanda.
    ///
    /// Sem `label`, o próprio texto do verbete vira o rótulo. Reinserir um
    /// verbete existente **sobrescreve** o rótulo antigo sem alterar `len()`
    /// — a última chamada vence.
    ///
    /// A palavra-chave vazia é rejeitada com [`TrieError::EmptyKeyword`].
    pub fn insert(&mut self, keyword: &str, label: Option<&str>) -> Result<(), TrieError> {
        if keyword.is_empty() {
            return Err(TrieError::EmptyKeyword);
        }
        let label = label.unwrap_or(keyword).to_string();

        let mut node = &mut self.root;
        for ch in keyword.chars() {
            node = node.children.entry(ch).or_default();
        }
        if node.label.is_none() {
            self.count += 1;
        }
        node.label = Some(label);
        Ok(())
    }

    /// Insere vários verbetes, cada um rotulado com o próprio texto.
    ///
    /// Iteração pura sobre [`insert`](Self::insert); interrompe no primeiro
    /// verbete inválido.
    pub fn insert_all<I, S>(&mut self, keywords: I) -> Result<(), TrieError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for keyword in keywords {
            self.insert(keyword.as_ref(), None)?;
        }
        Ok(())
    }

    /// Insere pares `(verbete, rótulo)`, tipicamente vindos de um mapa ou do
    /// carregador de arquivos externo.
    pub fn insert_pairs<I, K, V>(&mut self, pairs: I) -> Result<(), TrieError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (keyword, label) in pairs {
            self.insert(keyword.as_ref(), Some(label.as_ref()))?;
        }
        Ok(())
    }

    /// Remove um verbete. Devolve `true` se ele existia.
    ///
    /// Falha rápido (sem mutação) quando algum caractere não tem aresta ou o
    /// nó final não é terminal. No sucesso, limpa o rótulo e **poda** de
    /// baixo para cima: cada nó que ficou morto (sem filhos, sem rótulo) tem
    /// sua aresta removida no pai; a poda para no primeiro ancestral que
    /// ainda tem outros filhos ou é terminal de um verbete mais curto.
    /// Prefixos compartilhados com verbetes vivos sobrevivem intactos.
    pub fn delete(&mut self, keyword: &str) -> bool {
        if keyword.is_empty() {
            // Nunca armazenada (insert a rejeita), logo nada a remover
            return false;
        }
        let chars: Vec<char> = keyword.chars().collect();
        if !remove_rec(&mut self.root, &chars) {
            return false;
        }
        self.count -= 1;
        true
    }

    /// Remove vários verbetes, ignorando silenciosamente os inexistentes.
    pub fn delete_all<I, S>(&mut self, keywords: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for keyword in keywords {
            self.delete(keyword.as_ref());
        }
    }

    /// Rótulo associado a um verbete exato, ou `None` se o caminho não existe
    /// ou existe apenas como prefixo de verbetes mais longos.
    pub fn get_label(&self, keyword: &str) -> Option<&str> {
        let mut node = &self.root;
        for ch in keyword.chars() {
            node = node.children.get(&ch)?;
        }
        node.label.as_deref()
    }

    /// Verifica se o verbete exato está no dicionário.
    ///
    /// `contains("苏州")` é `true` mesmo que só "苏州大学" prolongue o
    /// caminho, desde que "苏州" tenha sido inserida; o inverso não vale.
    pub fn contains(&self, keyword: &str) -> bool {
        self.get_label(keyword).is_some()
    }

    /// Enumera todos os verbetes com seus rótulos.
    ///
    /// Travessia recursiva em pré-ordem reconstruindo cada verbete pela
    /// concatenação dos caracteres do caminho. Pensada para inspeção e
    /// debugging, não para o caminho quente de varredura.
    pub fn keywords(&self) -> HashMap<String, String> {
        let mut out = HashMap::new();
        let mut prefix = String::new();
        collect_keywords(&self.root, &mut prefix, &mut out);
        out
    }
}

/// Desce recursivamente até o fim de `chars`, limpa o rótulo terminal e poda
/// nós mortos na volta da recursão. Devolve `false` (sem qualquer mutação)
/// se o verbete não está presente.
fn remove_rec(node: &mut TrieNode, chars: &[char]) -> bool {
    let Some((&ch, rest)) = chars.split_first() else {
        // Fim do caminho: só é remoção válida se há rótulo aqui
        if node.label.is_none() {
            return false;
        }
        node.label = None;
        return true;
    };
    let Some(child) = node.children.get_mut(&ch) else {
        return false;
    };
    if !remove_rec(child, rest) {
        return false;
    }
    if child.is_dead() {
        node.children.remove(&ch);
    }
    true
}

fn collect_keywords(node: &TrieNode, prefix: &mut String, out: &mut HashMap<String, String>) {
    if let Some(label) = &node.label {
        out.insert(prefix.clone(), label.clone());
    }
    for (ch, child) in &node.children {
        prefix.push(*ch);
        collect_keywords(child, prefix, out);
        prefix.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_insercao_consulta_remocao() {
        let mut trie = KeywordTrie::new();
        trie.insert("苏州", Some("GPE")).unwrap();
        trie.insert("北京", Some("GPE")).unwrap();

        assert_eq!(trie.len(), 2);
        assert_eq!(trie.get_label("苏州"), Some("GPE"));
        assert!(trie.contains("北京"));
        assert!(!trie.contains("北京大学"));

        assert!(trie.delete("苏州"));
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.get_label("苏州"), None);
        assert!(!trie.contains("苏州"));
    }

    #[test]
    fn test_remocao_de_inexistente_nao_muta() {
        let mut trie = KeywordTrie::new();
        trie.insert("苏州", None).unwrap();

        assert!(!trie.delete("北京"));
        assert!(!trie.delete("苏"));
        assert!(!trie.delete("苏州大学"));
        assert!(!trie.delete(""));
        assert_eq!(trie.len(), 1);
        assert!(trie.contains("苏州"));
    }

    #[test]
    fn test_reinsercao_sobrescreve_rotulo_sem_mudar_contagem() {
        let mut trie = KeywordTrie::new();
        trie.insert("苏州", Some("GPE")).unwrap();
        trie.insert("苏州", Some("CITY")).unwrap();

        assert_eq!(trie.len(), 1);
        assert_eq!(trie.get_label("苏州"), Some("CITY"));
    }

    #[test]
    fn test_rotulo_padrao_e_o_proprio_verbete() {
        let mut trie = KeywordTrie::new();
        trie.insert("苏州", None).unwrap();
        assert_eq!(trie.get_label("苏州"), Some("苏州"));
    }

    #[test]
    fn test_verbete_vazio_rejeitado() {
        let mut trie = KeywordTrie::new();
        assert_eq!(trie.insert("", Some("X")), Err(TrieError::EmptyKeyword));
        assert_eq!(trie.len(), 0);
        assert!(!trie.contains(""));
        assert_eq!(trie.get_label(""), None);
    }

    #[test]
    fn test_prefixo_compartilhado_sobrevive_a_remocao() {
        let mut trie = KeywordTrie::new();
        trie.insert("苏州", Some("GPE")).unwrap();
        trie.insert("苏州大学", Some("ORG")).unwrap();

        assert!(trie.delete("苏州"));
        assert!(!trie.contains("苏州"));
        assert!(trie.contains("苏州大学"));
        assert_eq!(trie.get_label("苏州大学"), Some("ORG"));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_poda_remove_ramo_morto_e_preserva_terminal_intermediario() {
        let mut trie = KeywordTrie::new();
        trie.insert("苏州", Some("GPE")).unwrap();
        trie.insert("苏州大学", Some("ORG")).unwrap();

        assert!(trie.delete("苏州大学"));

        // O ramo 大 -> 学 deve ter sido podado; o terminal "苏州" permanece
        let zhou = &trie.root.children[&'苏'].children[&'州'];
        assert!(zhou.children.is_empty());
        assert_eq!(zhou.label.as_deref(), Some("GPE"));
    }

    #[test]
    fn test_poda_para_no_ancestral_com_outros_filhos() {
        let mut trie = KeywordTrie::new();
        trie.insert("苏有朋", Some("PER")).unwrap();
        trie.insert("苏有月", Some("PER")).unwrap();

        assert!(trie.delete("苏有朋"));

        // "苏有" segue vivo por causa de "苏有月"
        let you = &trie.root.children[&'苏'].children[&'有'];
        assert_eq!(you.children.len(), 1);
        assert!(you.children.contains_key(&'月'));
        assert!(trie.contains("苏有月"));
    }

    #[test]
    fn test_remocao_total_esvazia_a_arvore() {
        let mut trie = KeywordTrie::new();
        trie.insert_all(["苏州", "苏大", "北京"]).unwrap();

        trie.delete_all(["苏州", "苏大", "北京", "nunca-existiu"]);

        assert!(trie.is_empty());
        assert!(trie.root.children.is_empty());
    }

    #[test]
    fn test_insert_pairs_e_enumeracao() {
        let mut trie = KeywordTrie::new();
        trie.insert_pairs([("苏州", "GPE"), ("苏大", "ORG"), ("小明", "PER")])
            .unwrap();

        let all = trie.keywords();
        assert_eq!(all.len(), 3);
        assert_eq!(all["苏州"], "GPE");
        assert_eq!(all["苏大"], "ORG");
        assert_eq!(all["小明"], "PER");
    }

    #[test]
    fn test_enumeracao_reconstroi_verbetes_com_prefixo_comum() {
        let mut trie = KeywordTrie::new();
        trie.insert_pairs([("a", "1"), ("ab", "2"), ("abc", "3"), ("abd", "4")])
            .unwrap();

        let all = trie.keywords();
        assert_eq!(all.len(), 4);
        for (k, v) in [("a", "1"), ("ab", "2"), ("abc", "3"), ("abd", "4")] {
            assert_eq!(all[k], v);
        }
    }
}
