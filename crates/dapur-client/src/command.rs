/// A line typed at the `dapur-cli` prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Toggle a catalog ingredient by number or name, or a custom one by name.
    Toggle(String),
    /// Type text into the custom-ingredient field and add it.
    Add(String),
    Generate,
    /// Toggle favorite for generated recipe N (1-based).
    Favorite(usize),
    /// Remove favorite N (1-based) from the favorites list.
    Unfavorite(usize),
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  toggle <n|name>   select or deselect an ingredient (t)
  add <name>        add a custom ingredient (a)
  generate          ask the chef for recipes (g)
  fav <n>           toggle favorite for generated recipe n (f)
  unfav <n>         remove favorite n from the favorites list
  show              redraw the screen (s)
  help              show this help (h)
  quit              leave (q)";

impl Command {
    /// Parse one input line. Returns Ok(None) for a blank line.
    pub fn parse(line: &str) -> Result<Option<Command>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "toggle" | "t" => Command::Toggle(required(rest, "toggle <n|name>")?),
            "add" | "a" => Command::Add(required(rest, "add <name>")?),
            "generate" | "g" => Command::Generate,
            "fav" | "f" => Command::Favorite(number(rest, "fav <n>")?),
            "unfav" => Command::Unfavorite(number(rest, "unfav <n>")?),
            "show" | "s" => Command::Show,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => return Err(format!("Unknown command: {} (try 'help')", other)),
        };
        Ok(Some(command))
    }
}

fn required(rest: &str, usage: &str) -> Result<String, String> {
    if rest.is_empty() {
        return Err(format!("Usage: {}", usage));
    }
    Ok(rest.to_string())
}

fn number(rest: &str, usage: &str) -> Result<usize, String> {
    match rest.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(format!("Usage: {}", usage)),
    }
}
