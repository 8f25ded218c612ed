/// Gera o prompt de um briefing pelo terminal
///
/// Uso:
///   cargo run --bin generate-prompt -- "Estamos lançando um aplicativo..."
///   cat briefing.txt | cargo run --bin generate-prompt -- --enhance
///
/// Com `--enhance`, usa OPENAI_API_KEY e cai no template se a chamada falhar.

use std::io::{self, IsTerminal, Read};

use anyhow::{bail, Context};
use promptcraft::config::Settings;
use promptcraft::services::{GenerationMode, OpenAIService, PromptService, PromptSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut enhance = false;
    let mut words = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--enhance" => enhance = true,
            _ => words.push(arg),
        }
    }

    let briefing = if words.is_empty() {
        if io::stdin().is_terminal() {
            bail!("informe o briefing como argumento ou via stdin");
        }
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("falha ao ler o briefing do stdin")?;
        buffer
    } else {
        words.join(" ")
    };

    if briefing.trim().is_empty() {
        bail!("briefing vazio");
    }

    let settings = Settings::new().context("falha ao carregar configuração")?;
    let service = PromptService::new(OpenAIService::new(settings.enhancer)?);

    let mode = if enhance { GenerationMode::Enhanced } else { GenerationMode::Template };
    let api_key = std::env::var("OPENAI_API_KEY").ok();

    let generation = service
        .generate(&briefing, mode, api_key.as_deref(), "cli")
        .await;

    let analysis = &generation.analysis;
    let product = &analysis.product;

    println!("\n{}", "=".repeat(80));
    println!("ANÁLISE DO BRIEFING");
    println!("{}\n", "=".repeat(80));

    println!("  • Categoria: {}", product.category);
    if let Some(subcategory) = product.subcategory {
        println!("  • Subcategoria: {}", subcategory);
    }
    if !product.name.is_empty() {
        println!("  • Nome: {}", product.name);
    }
    println!("  • Descrição: {}", product.description);
    if !product.features.is_empty() {
        println!("  • Funcionalidades: {}", product.features.join(", "));
    }
    if !product.benefits.is_empty() {
        println!("  • Benefícios: {}", product.benefits.join(", "));
    }
    println!("  • Público-alvo: {}", analysis.target_audience);
    println!(
        "  • Gatilhos emocionais: {}",
        analysis.emotions.iter().map(|e| e.label()).collect::<Vec<_>>().join(", ")
    );
    println!("  • Objetivo: {}", analysis.goal);
    println!("  • Termos-chave: {}", analysis.key_terms.join(", "));
    println!("  • Tamanho: {} caracteres", analysis.briefing_length);

    println!("\n{}", "-".repeat(80));
    match (generation.source, &generation.fallback_reason) {
        (PromptSource::Remote, _) => println!("PROMPT (OpenAI)"),
        (PromptSource::Template, Some(reason)) => println!("PROMPT (template - fallback: {})", reason),
        (PromptSource::Template, None) => println!("PROMPT (template)"),
    }
    println!("{}\n", "-".repeat(80));
    println!("{}", generation.prompt);

    Ok(())
}
