/// Replaces the `$$` token with the shell's own process id.
#[derive(Debug, Clone)]
pub struct PidExpander {
    pid: String,
}

impl Default for PidExpander {
    fn default() -> Self {
        Self::new()
    }
}

impl PidExpander {
    pub const TOKEN: &'static str = "$$";

    pub fn new() -> Self {
        Self::with_pid(std::process::id())
    }

    pub fn with_pid(pid: u32) -> Self {
        Self {
            pid: pid.to_string(),
        }
    }

    pub fn pid(&self) -> &str {
        &self.pid
    }

    /// Single left-to-right pass. Substituted text is never rescanned, so
    /// `$$$` becomes `<pid>$`.
    pub fn expand(&self, line: &str) -> String {
        if !line.contains(Self::TOKEN) {
            return line.to_string();
        }

        let mut out = String::with_capacity(line.len() + self.pid.len());
        let mut rest = line;
        while let Some(pos) = rest.find(Self::TOKEN) {
            out.push_str(&rest[..pos]);
            out.push_str(&self.pid);
            rest = &rest[pos + Self::TOKEN.len()..];
        }
        out.push_str(rest);
        out
    }
}
