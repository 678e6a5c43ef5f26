use std::path::PathBuf;

/// Upper bound on argv entries for one command.
pub const MAX_ARGS: usize = 512;

/// Target used when a redirection token has no filename after it.
pub const NULL_DEVICE: &str = "/dev/null";

const BACKGROUND: &str = "&";
const REDIRECT_IN: &str = "<";
const REDIRECT_OUT: &str = ">";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Command {
    pub arguments: Vec<String>,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub background: bool,
}

impl Command {
    pub fn program(&self) -> Option<&str> {
        self.arguments.first().map(String::as_str)
    }

    pub fn args(&self) -> &[String] {
        self.arguments.get(1..).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }
}

/// True for lines that never produce a command: empty, blank, or `#` comments.
pub fn is_ignorable(line: &str) -> bool {
    match line.trim_start().chars().next() {
        None => true,
        Some(c) => c == '#',
    }
}

/// Turns an already-expanded line into a [`Command`].
///
/// Returns `None` for blank and comment lines. A trailing `&` requests
/// background execution, granted only when `foreground_only` is off; an `&`
/// anywhere else is an ordinary argument. `<` and `>` consume the following
/// token as a path, falling back to [`NULL_DEVICE`] when none follows.
pub fn parse_line(line: &str, foreground_only: bool) -> Option<Command> {
    if is_ignorable(line) {
        return None;
    }

    let tokens: Vec<&str> = line
        .split(|c: char| c == ' ' || c == '\t' || c == '\n' || c == '\r')
        .filter(|t| !t.is_empty())
        .collect();

    let mut command = Command::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i];
        let is_last = i + 1 == tokens.len();
        match token {
            BACKGROUND if is_last => {
                command.background = !foreground_only;
            }
            REDIRECT_IN => {
                command.input = Some(redirect_target(tokens.get(i + 1)));
                i += 1;
            }
            REDIRECT_OUT => {
                command.output = Some(redirect_target(tokens.get(i + 1)));
                i += 1;
            }
            _ => {
                if command.arguments.len() < MAX_ARGS {
                    command.arguments.push(token.to_string());
                } else {
                    tracing::warn!(token, "argument limit of {} reached, dropping", MAX_ARGS);
                }
            }
        }
        i += 1;
    }

    Some(command)
}

fn redirect_target(token: Option<&&str>) -> PathBuf {
    PathBuf::from(token.copied().unwrap_or(NULL_DEVICE))
}
