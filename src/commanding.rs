pub const HELP_TEXT: &str = "\
This program is a smart calculator.  You may calculate expressions and assign values to variables.
A variable consists of latin characters only, e.g. A-Z and a-z.
If you try to create an invalid variable using an invalid name, the program will inform you.
Valid examples include:
   1 + 2 + 3
   a = b = 5
   a + b - 7
   5 * (a + 7)
Once you type the expression, hit ENTER to calculate.
You may also look up the value of a valid identifier by typing its name and hitting ENTER.
Examples include:
a = 5
a
# the program will display the value of 'a' which in this case is 5.
Type /exit to leave the program.
Happy calculating!
";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    help,
    exit,
    unknown,
}

impl Command {
    /// Returns `None` when the line is not a command at all.
    pub fn parse(line: &str) -> Option<Self> {
        if !line.starts_with('/') {
            return None;
        }
        Some(match line {
            "/help" => Command::help,
            "/exit" => Command::exit,
            _ => Command::unknown,
        })
    }

    pub fn reply(&self) -> &'static str {
        match self {
            Command::help => HELP_TEXT,
            Command::exit => "Bye!",
            Command::unknown => "Unknown command",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn recognises_commands() {
        assert_eq!(Command::parse("/help"), Some(Command::help));
        assert_eq!(Command::parse("/exit"), Some(Command::exit));
        assert_eq!(Command::parse("/exit "), Some(Command::unknown));
        assert_eq!(Command::parse("/quit"), Some(Command::unknown));
        assert_eq!(Command::parse("/"), Some(Command::unknown));
        assert_eq!(Command::parse("1 / 2"), None);
    }

    #[test]
    fn help_text_ends_with_blank_line() {
        assert!(Command::help.reply().starts_with("This program is a smart calculator."));
        assert!(Command::help.reply().ends_with("Happy calculating!\n"));
        assert_eq!(Command::exit.reply(), "Bye!");
        assert_eq!(Command::unknown.reply(), "Unknown command");
    }
}
