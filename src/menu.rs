//! Interactive menu over the restyle and chat flows.
//!
//! Mirrors the two tools behind a numbered selection loop. Service failures
//! are printed and return the user to the menu instead of ending the
//! session.

use std::io::{self, Write};
use std::path::PathBuf;

use crate::app::App;
use crate::{output, Result};

const EXIT_WORDS: [&str; 2] = ["exit", "quit"];

/// Run the interactive menu until the user chooses to exit or stdin closes.
pub async fn run(app: &App) -> Result<()> {
    println!("AI-Tools v0.1.0 initialized. Welcome to the future of AI-powered content creation!");

    loop {
        println!();
        println!("--- AI tool selection ---");
        println!("1. Image style converter");
        println!("2. Chatbot");
        println!("3. Exit");

        let Some(choice) = prompt("Choose a tool (1, 2, 3): ")? else {
            break;
        };

        match choice.as_str() {
            "1" => restyle_flow(app).await?,
            "2" => chat_flow(app).await?,
            other if other == "3" || is_exit(other) => {
                println!("Exiting AI-Tools. Goodbye!");
                break;
            }
            _ => println!("Invalid selection. Enter 1, 2, or 3."),
        }
    }

    Ok(())
}

async fn restyle_flow(app: &App) -> Result<()> {
    println!();
    println!("--- Image style converter ---");
    println!("Restyles an existing image in a style of your choice.");

    let Some(raw_path) = prompt("Enter the full path of the image to convert: ")? else {
        return Ok(());
    };
    // Normalize Windows-style separators
    let path = PathBuf::from(raw_path.replace('\\', "/"));
    if !path.exists() {
        println!(
            "Error: file '{}' not found. Check the path and try again.",
            path.display()
        );
        return Ok(());
    }

    let Some(style) =
        prompt("Enter the target style (e.g. oil painting, pixel art, watercolor): ")?
    else {
        return Ok(());
    };
    if style.is_empty() {
        println!("No style given.");
        return Ok(());
    }

    println!();
    println!("Converting '{}' into the '{}' style...", path.display(), style);
    println!("This can take anywhere from a few seconds to a few minutes.");

    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) => {
            println!("Error: could not read '{}': {}", path.display(), e);
            return Ok(());
        }
    };

    match app.restyle_image(&bytes, &style, None).await {
        Ok(restyled) => {
            let output_path = PathBuf::from(output::default_output_name(&path, &style));
            match output::save_image(&restyled.bytes, &output_path) {
                Ok(saved) => {
                    println!();
                    println!(
                        "Conversion succeeded! The result was saved to '{}'.",
                        saved.display()
                    );
                }
                Err(e) => println!("Error: could not save the result: {}", e),
            }
        }
        Err(e) => {
            println!();
            println!("Conversion failed: {}", e);
        }
    }

    Ok(())
}

async fn chat_flow(app: &App) -> Result<()> {
    println!();
    println!("--- Chatbot ---");
    println!("Ask text questions, or ask about an image.");
    println!("Type 'exit' or 'quit' at a question prompt to leave the chatbot.");

    loop {
        let Some(mode) =
            prompt("Choose a chat mode (1: text only, 2: with an image, 3: back to main menu): ")?
        else {
            return Ok(());
        };

        match mode.as_str() {
            "1" => {
                let Some(question) = prompt("Enter your question: ")? else {
                    return Ok(());
                };
                if is_exit(&question) {
                    break;
                }
                if question.is_empty() {
                    continue;
                }

                match app.chat(&question).await {
                    Ok(reply) => println!("Chatbot: {}", reply),
                    Err(e) => println!("Could not get a chatbot response: {}", e),
                }
            }
            "2" => {
                let Some(raw_path) = prompt("Enter the full path of the image to ask about: ")?
                else {
                    return Ok(());
                };
                let path = PathBuf::from(raw_path.replace('\\', "/"));
                if !path.exists() {
                    println!("Error: file '{}' not found. Try again.", path.display());
                    continue;
                }

                let Some(question) = prompt("Enter your question about the image: ")? else {
                    return Ok(());
                };
                if is_exit(&question) {
                    break;
                }
                if question.is_empty() {
                    continue;
                }

                let bytes = match std::fs::read(&path) {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        println!("Error: could not read '{}': {}", path.display(), e);
                        continue;
                    }
                };

                match app.chat_with_image(&question, &bytes).await {
                    Ok(reply) => println!("Chatbot: {}", reply),
                    Err(e) => println!("Could not get a chatbot response: {}", e),
                }
            }
            "3" => {
                println!("Returning to the main menu.");
                break;
            }
            _ => println!("Invalid selection. Try again."),
        }
    }

    Ok(())
}

/// Print `message` and read one trimmed line. `None` means stdin reached
/// end of input.
fn prompt(message: &str) -> Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

fn is_exit(input: &str) -> bool {
    EXIT_WORDS.iter().any(|word| input.eq_ignore_ascii_case(word))
}
