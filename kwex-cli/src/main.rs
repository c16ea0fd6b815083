//! Ferramenta de linha de comando: carrega um dicionário `verbete<SEP>rótulo`
//! e anota um texto (argumento ou entrada padrão) com os triplos
//! `(start, end, label)` do kwex-core, em TSV ou JSON.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use kwex_core::KeywordTrie;
use tracing::info;

mod loader;

#[derive(Parser)]
#[command(name = "kwex", about = "Anota textos com um dicionário de palavras-chave")]
struct Cli {
    /// Arquivo de dicionário: uma linha por verbete, `verbete<SEP>rótulo`
    /// ou apenas `verbete`; linhas em branco são ignoradas
    #[arg(short, long)]
    dict: PathBuf,

    /// Separador entre verbete e rótulo
    #[arg(long, default_value = "\t")]
    sep: String,

    /// Trata espaços do texto de entrada como transparentes no casamento
    #[arg(long)]
    ignore_whitespace: bool,

    /// Emite as ocorrências como JSON em vez de TSV
    #[arg(long)]
    json: bool,

    /// Texto a anotar; se omitido, lê a entrada padrão até EOF
    text: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut trie = KeywordTrie::with_ignore_whitespace(cli.ignore_whitespace);
    let lines = loader::load_path(&mut trie, &cli.dict, &cli.sep)
        .with_context(|| format!("carregando o dicionário {}", cli.dict.display()))?;
    info!(lines, keywords = trie.len(), "dicionário carregado");

    let text = match cli.text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("lendo o texto da entrada padrão")?;
            buf
        }
    };

    let matches = trie.extract(&text);
    info!(matches = matches.len(), chars = text.chars().count(), "texto anotado");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
    } else {
        let chars: Vec<char> = text.chars().collect();
        for m in &matches {
            println!("{}\t{}\t{}\t{}", m.start, m.end, m.label, m.surface(&chars));
        }
    }

    Ok(())
}
