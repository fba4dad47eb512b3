//! The interactive shell.
//!
//! A line-oriented REPL over the synchronous client. Per-command
//! failures are reported inline and the session continues; only
//! `exit`/`quit` or end of input stop the loop.

use std::io::{self, BufRead, Write};

use llamagate_client::{ChatMessage, Client, Config, ModelManager};

use crate::output;

pub struct Shell {
    client: Client,
    model: String,
    temperature: f32,
    max_tokens: u32,
    history: Vec<ChatMessage>,
}

impl Shell {
    pub fn new(host: &str, model: String, config: &Config) -> Self {
        Self {
            client: Client::new(host),
            model,
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            history: Vec::new(),
        }
    }

    /// Run the command loop until `exit` or end of input.
    pub fn run(mut self) -> anyhow::Result<()> {
        println!("Welcome to the llamagate shell. Type help or ? to list commands.");

        let stdin = io::stdin();
        let mut line = String::new();
        loop {
            print!("llamagate> ");
            io::stdout().flush()?;

            line.clear();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }

            let input = line.trim();
            if input.is_empty() {
                continue;
            }
            let (command, arg) = split_command(input);

            match command {
                "query" | "q" => self.query(arg),
                "chat" => self.chat(arg),
                "model" => self.switch_model(arg),
                "models" => self.models(),
                "info" => self.info(),
                "reset" => self.reset(),
                "help" | "?" => help(),
                "exit" | "quit" => break,
                other => output::notice(&format!(
                    "Unknown command: {other}. Type help to list commands."
                )),
            }
        }
        Ok(())
    }

    fn query(&self, arg: &str) {
        if arg.is_empty() {
            output::notice("Please provide a query text");
            return;
        }
        match self
            .client
            .generate(arg, &self.model, self.temperature, self.max_tokens)
        {
            Ok(result) => println!("{}", result.text),
            Err(e) => output::error(&e.to_string()),
        }
    }

    fn chat(&mut self, arg: &str) {
        if arg.is_empty() {
            output::notice("Please provide a message");
            return;
        }
        self.history.push(ChatMessage::user(arg));
        match self
            .client
            .chat(&self.history, &self.model, self.temperature, self.max_tokens)
        {
            Ok(result) => {
                println!("{}", result.text);
                self.history.push(ChatMessage::assistant(result.text));
            }
            Err(e) => {
                // Keep the history equal to what the model has seen.
                self.history.pop();
                output::error(&e.to_string());
            }
        }
    }

    /// Show the current model, or switch after checking the name exists
    /// on the server.
    fn switch_model(&mut self, arg: &str) {
        if arg.is_empty() {
            println!("Current model: {}", self.model);
            return;
        }
        match self.client.list_models() {
            Ok(models) => {
                if models.iter().any(|m| m.name == arg) {
                    self.model = arg.to_owned();
                    output::success(&format!("Model changed to {}", self.model));
                } else {
                    output::notice(&format!("Model '{arg}' not found. Available models:"));
                    for model in &models {
                        println!("- {}", model.name);
                    }
                }
            }
            Err(e) => output::error(&e.to_string()),
        }
    }

    fn models(&self) {
        match self.client.list_models() {
            Ok(models) => {
                output::heading("Available models:");
                for model in &models {
                    println!("- {} ({})", model.name, output::human_size(model.size));
                }
            }
            Err(e) => output::error(&e.to_string()),
        }
    }

    fn info(&self) {
        let manager = ModelManager::new(&self.client);
        match manager.get_model(&self.model) {
            Ok(Some(model)) => {
                println!("Name: {}", model.name);
                println!("Size: {}", output::human_size(model.size));
                println!("Modified: {}", model.modified_at);
                if let Some(digest) = &model.digest {
                    println!("Digest: {digest}");
                }
            }
            Ok(None) => output::notice(&format!(
                "Model '{}' not found on the server",
                self.model
            )),
            Err(e) => output::error(&e.to_string()),
        }
    }

    fn reset(&mut self) {
        self.history.clear();
        output::success("Conversation history cleared");
    }
}

/// Split an input line into its command word and the rest.
fn split_command(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((command, arg)) => (command, arg.trim()),
        None => (input, ""),
    }
}

fn help() {
    println!("Commands:");
    println!("  query <text>   Generate a one-off completion (alias: q)");
    println!("  chat <text>    Chat with the running conversation history");
    println!("  model [name]   Show or switch the current model");
    println!("  models         List available models");
    println!("  info           Show details for the current model");
    println!("  reset          Clear the conversation history");
    println!("  exit           Leave the shell (alias: quit)");
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn command_word_is_separated_from_the_argument() {
        assert_eq!(split_command("query tell me a joke"), ("query", "tell me a joke"));
        assert_eq!(split_command("model  mistral"), ("model", "mistral"));
        assert_eq!(split_command("models"), ("models", ""));
    }

    #[test]
    fn chat_history_starts_empty_and_clears_on_reset() {
        let config = Config::default();
        let mut shell = Shell::new("http://localhost:11434", "llama3".into(), &config);
        assert!(shell.history.is_empty());
        shell.history.push(ChatMessage::user("hi"));
        shell.reset();
        assert!(shell.history.is_empty());
    }
}
