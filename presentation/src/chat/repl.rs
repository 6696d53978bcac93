//! REPL (Read-Eval-Print Loop) for the chat session
//!
//! Reads user lines and forwards them to the script through
//! [`ChatSession`]; slash commands are handled locally.

use colored::Colorize;
use parley_application::ChatSession;
use parley_domain::ScriptSource;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};

/// Interactive chat REPL bound to one script session.
pub struct ChatRepl {
    session: ChatSession,
    script: ScriptSource,
    description: Option<String>,
    prompt: String,
    show_banner: bool,
}

impl ChatRepl {
    pub fn new(session: ChatSession, script: ScriptSource) -> Self {
        Self {
            session,
            script,
            description: None,
            prompt: ">>> ".to_string(),
            show_banner: true,
        }
    }

    /// Script description shown in the banner and by `/script`.
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Prompt shown before each user line.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Set whether to show the welcome banner.
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Run the interactive REPL.
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = dirs::data_dir().map(|p| p.join("parley").join("history.txt"));
        if let Some(path) = &history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        if self.show_banner {
            self.print_banner();
        }

        match self.session.begin(&self.script).await {
            Ok(Some(welcome)) => println!("{}", welcome.cyan()),
            Ok(None) => {}
            Err(e) => {
                eprintln!("{}", e.to_string().red());
                return Ok(());
            }
        }

        loop {
            let readline = rl.readline(&self.prompt);

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(line).await {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    match self.session.submit(line).await {
                        Ok(reply) => println!("{}", reply.cyan()),
                        Err(e) => eprintln!("{}", e.to_string().red()),
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(path) = &history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_banner(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│                   parley                    │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Script: {}", self.script.name());
        if let Some(description) = &self.description {
            if let Some(first_line) = description.lines().find(|l| !l.trim().is_empty()) {
                println!("{}", first_line.trim_start_matches('#').trim().dimmed());
            }
        }
        println!();
        println!("Commands:");
        println!("  /help     - Script help");
        println!("  /script   - Show the loaded script");
        println!("  /quit     - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if the REPL should exit.
    async fn handle_command(&self, cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                true
            }
            "/help" | "/h" | "/?" => {
                match self.session.help().await {
                    Ok(Some(help)) => println!("{}", help),
                    Ok(None) => println!("(the script provides no help)"),
                    Err(e) => eprintln!("{}", e.to_string().red()),
                }
                println!();
                println!("Commands: /help, /script, /quit");
                false
            }
            "/script" => {
                println!();
                println!("Script: {}", self.script.name());
                println!("Path:   {}", self.script.path().display());
                if let Some(description) = &self.description {
                    println!();
                    println!("{}", description);
                }
                println!();
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }
}
