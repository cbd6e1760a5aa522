use newsdesk_core::{Category, Locale, ThemeMode};

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Category(Category),
    /// Empty text clears the search.
    Search(String),
    /// 1-based card number in the main list.
    Summary(usize),
    Lang(Locale),
    Theme(ThemeMode),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum CommandError {
    #[error("unknown command {0:?}, type `help` for a list")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("unknown category {0:?}, expected one of: ai, ml, robotics, nlp, cv")]
    UnknownCategory(String),
    #[error("{0:?} is not a card number")]
    BadCardNumber(String),
    #[error("unknown language {0:?}, expected en or fr")]
    UnknownLocale(String),
    #[error("unknown theme {0:?}, expected light, dark or system")]
    UnknownTheme(String),
}

pub(crate) fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "category" | "c" => {
            let key = required("category", rest)?;
            Category::from_key(key)
                .map(Command::Category)
                .ok_or_else(|| CommandError::UnknownCategory(key.to_string()))?
        }
        "search" | "s" => Command::Search(rest.to_string()),
        "summary" | "sum" => {
            let number = required("summary", rest)?;
            match number.parse::<usize>() {
                Ok(n) if n > 0 => Command::Summary(n),
                _ => return Err(CommandError::BadCardNumber(number.to_string())),
            }
        }
        "lang" => {
            let code = required("lang", rest)?;
            Locale::from_code(code)
                .map(Command::Lang)
                .ok_or_else(|| CommandError::UnknownLocale(code.to_string()))?
        }
        "theme" => {
            let name = required("theme", rest)?;
            ThemeMode::from_name(name)
                .map(Command::Theme)
                .ok_or_else(|| CommandError::UnknownTheme(name.to_string()))?
        }
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => return Err(CommandError::Unknown(word.to_string())),
    };
    Ok(Some(command))
}

fn required<'a>(command: &'static str, rest: &'a str) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument(command))
    } else {
        Ok(rest)
    }
}
