//! Ask command - run the ask collaborator from the terminal

use clap::Args;

use crate::config::Config;
use crate::pipeline::{self, Pipeline};
use crate::server::QUESTION_REQUIRED;

#[derive(Args)]
pub struct AskArgs {
    /// Question to ask (omit for interactive mode)
    pub question: Option<String>,

    /// Interactive chat mode
    #[arg(short, long)]
    pub interactive: bool,

    /// Pipeline provider
    #[arg(long, value_parser = ["command", "simulated"])]
    pub pipeline: Option<String>,
}

pub async fn run(args: AskArgs, mut config: Config) -> anyhow::Result<()> {
    super::override_provider(&mut config, args.pipeline.clone());
    let pipeline = pipeline::from_config(&config.pipeline)?;

    if args.interactive {
        return run_interactive(pipeline.as_ref()).await;
    }

    let question = args
        .question
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| anyhow::anyhow!("{}. Use -i for interactive mode.", QUESTION_REQUIRED))?;

    let answer = pipeline.ask(question).await?;
    println!("{}", answer);
    Ok(())
}

async fn run_interactive(pipeline: &dyn Pipeline) -> anyhow::Result<()> {
    use std::io::{self, BufRead, Write};

    println!("\nInteractive mode. Type 'quit' or 'exit' to leave.\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("You: ");
        stdout.flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        if input == "quit" || input == "exit" {
            println!("Goodbye!");
            break;
        }

        match pipeline.ask(input).await {
            Ok(answer) => println!("\n{}\n", answer),
            Err(e) => eprintln!("\nError: {}\n", e),
        }
    }

    Ok(())
}
