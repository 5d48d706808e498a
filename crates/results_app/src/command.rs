use results_core::Msg;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    Goto(u32),
    Reload,
    Quit,
}

impl Command {
    /// Parses one line typed at the prompt. Blank or unknown input is `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let head = words.next()?.to_ascii_lowercase();
        match head.as_str() {
            "n" | "next" => Some(Command::Next),
            "p" | "prev" | "previous" => Some(Command::Prev),
            "r" | "reload" => Some(Command::Reload),
            "q" | "quit" | "exit" => Some(Command::Quit),
            "g" | "goto" | "page" => words.next()?.parse().ok().map(Command::Goto),
            other => other.parse().ok().map(Command::Goto),
        }
    }

    pub fn to_msg(self) -> Option<Msg> {
        match self {
            Command::Next => Some(Msg::NextPageClicked),
            Command::Prev => Some(Msg::PrevPageClicked),
            Command::Goto(page) => Some(Msg::NavigateTo(page)),
            Command::Reload => Some(Msg::Load),
            Command::Quit => None,
        }
    }
}

pub const HELP: &str = "[n]ext  [p]rev  [g]oto <page>  [r]eload  [q]uit";

#[cfg(test)]
mod tests {
    use super::Command;

    #[test]
    fn parses_short_and_long_forms() {
        assert_eq!(Command::parse("n"), Some(Command::Next));
        assert_eq!(Command::parse("  PREV "), Some(Command::Prev));
        assert_eq!(Command::parse("g 4"), Some(Command::Goto(4)));
        assert_eq!(Command::parse("7"), Some(Command::Goto(7)));
        assert_eq!(Command::parse("quit"), Some(Command::Quit));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("goto"), None);
        assert_eq!(Command::parse("g -1"), None);
        assert_eq!(Command::parse("dance"), None);
    }
}
