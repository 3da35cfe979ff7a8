//! Line commands read from stdin.

use anyhow::{Context, Result, bail};
use picklist_lib::{Record, SelectValue};

/// One parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Select(String),
    Toggle(String),
    Deselect(String),
    Remove(String),
    Pop,
    Clear,
    Create,
    Type(String),
    Blur,
    Close,
    Backspace,
    Escape { menu_open: bool },
    Set(SelectValue<Record>),
    Menu,
    State,
}

impl Command {
    /// Parse a non-empty line. The first word names the command and the rest
    /// of the line is its argument.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim_start();
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (line.trim_end(), ""),
        };

        let command = match name {
            "select" => Self::Select(required(name, arg)?),
            "toggle" => Self::Toggle(required(name, arg)?),
            "deselect" => Self::Deselect(required(name, arg)?),
            "remove" => Self::Remove(required(name, arg)?),
            "pop" => Self::Pop,
            "clear" => Self::Clear,
            "create" => Self::Create,
            "type" => Self::Type(typed_text(line).to_string()),
            "blur" => Self::Blur,
            "close" => Self::Close,
            "backspace" => Self::Backspace,
            "escape" => match arg {
                "" => Self::Escape { menu_open: false },
                "open" => Self::Escape { menu_open: true },
                other => bail!("escape takes no argument or `open`, got {other:?}"),
            },
            "set" => {
                let value = serde_json::from_str(required(name, arg)?.as_str())
                    .with_context(|| format!("invalid value {arg:?}"))?;
                Self::Set(value)
            }
            "menu" => Self::Menu,
            "state" => Self::State,
            other => bail!("unknown command {other:?}"),
        };
        Ok(command)
    }
}

/// Text after `type `, untrimmed.
fn typed_text(line: &str) -> &str {
    line.strip_prefix("type")
        .and_then(|rest| rest.strip_prefix(' '))
        .unwrap_or_default()
}

fn required(name: &str, arg: &str) -> Result<String> {
    if arg.is_empty() {
        bail!("{name} needs an argument");
    }
    Ok(arg.to_string())
}

#[cfg(test)]
mod tests {
    use picklist_lib::record;

    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("pop").unwrap(), Command::Pop);
        assert_eq!(Command::parse("  clear  ").unwrap(), Command::Clear);
        assert_eq!(Command::parse("menu").unwrap(), Command::Menu);
        assert_eq!(Command::parse("escape").unwrap(), Command::Escape { menu_open: false });
        assert_eq!(Command::parse("escape open").unwrap(), Command::Escape { menu_open: true });
    }

    #[test]
    fn test_parse_value_argument() {
        assert_eq!(Command::parse("select red").unwrap(), Command::Select("red".to_string()));
        assert_eq!(
            Command::parse("remove  light blue ").unwrap(),
            Command::Remove("light blue".to_string())
        );
        assert!(Command::parse("select").is_err());
    }

    #[test]
    fn test_parse_type_keeps_spaces() {
        assert_eq!(Command::parse("type  ap ").unwrap(), Command::Type(" ap ".to_string()));
        assert_eq!(Command::parse("type").unwrap(), Command::Type(String::new()));
    }

    #[test]
    fn test_parse_set() {
        let command = Command::parse(r#"set [{"label":"Red","value":"red"}]"#).unwrap();
        assert_eq!(command, Command::Set(SelectValue::Multi(vec![record("Red", "red")])));
        assert_eq!(Command::parse("set null").unwrap(), Command::Set(SelectValue::Empty));
        assert!(Command::parse("set {oops").is_err());
    }

    #[test]
    fn test_parse_unknown() {
        assert!(Command::parse("explode").is_err());
        assert!(Command::parse("escape now").is_err());
    }
}
