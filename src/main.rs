use ai_tools::app::App;
use ai_tools::models::Config;
use ai_tools::{menu, output, server};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "ai-tools")]
#[command(about = "Restyle images and chat through generative AI services")]
struct CliArgs {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Restyle an image file in a named style.
    Restyle {
        /// Path to the input image.
        #[arg(long)]
        image: PathBuf,
        /// Target style, for example "oil painting" or "watercolor".
        #[arg(long)]
        style: String,
        /// Where to write the result. Defaults to a name derived from the
        /// input file and style.
        #[arg(long)]
        output: Option<PathBuf>,
        /// Extra guidance for the image description step.
        #[arg(long)]
        instruction: Option<String>,
    },
    /// Ask the chatbot a question, optionally about an image.
    Chat {
        /// Path to an image to ask about.
        #[arg(long)]
        image: Option<PathBuf>,
        /// The question text.
        #[arg(value_name = "QUESTION", required = true)]
        question: Vec<String>,
    },
    /// Serve the HTTP endpoints.
    Serve {
        /// Address to bind.
        #[arg(long, default_value = "127.0.0.1:8080")]
        bind: SocketAddr,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ai_tools=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ai-tools");

    let args = CliArgs::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let app = App::new(&config);

    let result = match args.command {
        None => menu::run(&app).await,
        Some(Command::Restyle {
            image,
            style,
            output,
            instruction,
        }) => {
            run_restyle(
                &app,
                &image,
                &style,
                output.as_deref(),
                instruction.as_deref(),
            )
            .await
        }
        Some(Command::Chat { image, question }) => {
            run_chat(&app, image.as_deref(), &question.join(" ")).await
        }
        Some(Command::Serve { bind }) => server::serve(Arc::new(app), bind).await,
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run_restyle(
    app: &App,
    image_path: &Path,
    style: &str,
    output_path: Option<&Path>,
    instruction: Option<&str>,
) -> ai_tools::Result<()> {
    let bytes = std::fs::read(image_path)?;

    let restyled = app.restyle_image(&bytes, style, instruction).await?;

    let output_path = match output_path {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(output::default_output_name(image_path, style)),
    };
    let saved = output::save_image(&restyled.bytes, &output_path)?;

    println!("Restyled image saved to '{}'", saved.display());
    Ok(())
}

async fn run_chat(app: &App, image_path: Option<&Path>, question: &str) -> ai_tools::Result<()> {
    let reply = match image_path {
        Some(path) => {
            let bytes = std::fs::read(path)?;
            app.chat_with_image(question, &bytes).await?
        }
        None => app.chat(question).await?,
    };

    println!("{}", reply);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_restyle_args() {
        let args = CliArgs::try_parse_from([
            "ai-tools",
            "restyle",
            "--image",
            "photo.png",
            "--style",
            "oil painting",
        ])
        .unwrap();

        match args.command {
            Some(Command::Restyle {
                image,
                style,
                output,
                instruction,
            }) => {
                assert_eq!(image, PathBuf::from("photo.png"));
                assert_eq!(style, "oil painting");
                assert!(output.is_none());
                assert!(instruction.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_defaults_to_menu() {
        let args = CliArgs::try_parse_from(["ai-tools"]).unwrap();
        assert!(args.command.is_none());
    }

    #[test]
    fn test_parse_serve_default_bind() {
        let args = CliArgs::try_parse_from(["ai-tools", "serve"]).unwrap();

        match args.command {
            Some(Command::Serve { bind }) => {
                assert_eq!(bind, "127.0.0.1:8080".parse().unwrap());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_chat_joins_question_words() {
        let args = CliArgs::try_parse_from(["ai-tools", "chat", "what", "is", "rust"]).unwrap();

        match args.command {
            Some(Command::Chat { image, question }) => {
                assert!(image.is_none());
                assert_eq!(question.join(" "), "what is rust");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_chat_rejects_missing_question() {
        assert!(CliArgs::try_parse_from(["ai-tools", "chat"]).is_err());
    }
}
