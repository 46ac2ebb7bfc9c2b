use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::board::{Color, Move};
use crate::config::EngineConfig;
use crate::player::MachinePlayer;

/// Line-oriented driver around a `MachinePlayer`.
pub struct TextEngine {
    player: MachinePlayer,
    config: EngineConfig,
    done: bool,
}

impl TextEngine {
    pub fn new(color: Color, config: EngineConfig) -> Self {
        Self { player: MachinePlayer::with_config(color, config), config, done: false }
    }

    pub fn player(&self) -> &MachinePlayer { &self.player }
    pub fn is_done(&self) -> bool { self.done }

    fn cmd_new(&mut self, args: &str) -> String {
        let mut tokens = args.split_whitespace();
        let color = match tokens.next().map(str::parse::<Color>) {
            Some(Ok(c)) => c,
            Some(Err(e)) => return format!("error {}", e),
            None => return "error new needs a color".to_string(),
        };
        let mut config = self.config;
        if let Some(tok) = tokens.next() {
            match tok.parse::<u32>() {
                Ok(d) => config.depth = d,
                Err(_) => return format!("error bad depth '{}'", tok),
            }
        }
        if let Err(e) = config.validate() { return format!("error {}", e); }
        self.config = config;
        self.player = MachinePlayer::with_config(color, config);
        info!("new game as {} (depth {})", color, config.depth);
        "ok".to_string()
    }

    fn cmd_depth(&mut self, args: &str) -> String {
        match args.trim().parse::<u32>() {
            Ok(d) if d >= 1 => {
                self.config.depth = d;
                self.player.set_depth(d);
                "ok".to_string()
            }
            _ => format!("error bad depth '{}'", args.trim()),
        }
    }

    fn cmd_go(&mut self) -> String {
        let m = self.player.choose_move();
        debug!("go -> {} ({} nodes)", m, self.player.last_nodes());
        format!("move {}", m)
    }

    fn cmd_record(&mut self, args: &str, opponent: bool) -> String {
        let m = match args.parse::<Move>() {
            Ok(m) => m,
            Err(e) => return format!("error {}", e),
        };
        let ok = if opponent { self.player.opponent_move(m) } else { self.player.force_move(m) };
        if ok { "ok".to_string() } else { "illegal".to_string() }
    }

    fn cmd_network(&self, args: &str) -> String {
        let color = match args.trim().parse::<Color>() {
            Ok(c) => c,
            Err(e) => return format!("error {}", e),
        };
        match self.player.network(color) {
            Some(path) => {
                let ids: Vec<String> = path.iter().map(|c| c.id().to_string()).collect();
                format!("network {}", ids.join(" "))
            }
            None => "network none".to_string(),
        }
    }

    /// Handles one command and returns its reply. Blank lines and `quit`
    /// produce no reply.
    pub fn handle_line(&mut self, line: &str) -> Option<String> {
        let line = line.trim();
        if line.is_empty() { return None; }
        let (cmd, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let reply = match cmd {
            "quit" => { self.done = true; return None; }
            "new" => self.cmd_new(rest),
            "depth" => self.cmd_depth(rest),
            "go" => self.cmd_go(),
            "opponent" => self.cmd_record(rest, true),
            "force" => self.cmd_record(rest, false),
            "board" => self.player.board().to_string().trim_end().to_string(),
            "network" => self.cmd_network(rest),
            other => format!("error unknown command '{}'", other),
        };
        Some(reply)
    }

    /// Runs until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            if let Some(reply) = self.handle_line(&line) {
                writeln!(output, "{}", reply)?;
                output.flush()?;
            }
            if self.done { break; }
        }
        Ok(())
    }

    pub fn run_loop(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run(stdin.lock(), stdout.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> TextEngine { TextEngine::new(Color::Black, EngineConfig::with_depth(1)) }

    #[test]
    fn records_and_rejects_moves() {
        let mut e = engine();
        assert_eq!(e.handle_line("force add 3 3").as_deref(), Some("ok"));
        assert_eq!(e.handle_line("opponent add 3 3").as_deref(), Some("illegal"));
        assert_eq!(e.handle_line("opponent add 0 3").as_deref(), Some("ok"));
        assert_eq!(e.player().board().my_steps(), 1);
        assert_eq!(e.player().board().opp_steps(), 1);
    }

    #[test]
    fn reports_errors() {
        let mut e = engine();
        assert!(e.handle_line("fly").unwrap().starts_with("error unknown command"));
        assert!(e.handle_line("force add one 2").unwrap().starts_with("error cannot parse move"));
        assert!(e.handle_line("depth 0").unwrap().starts_with("error"));
        assert!(e.handle_line("new purple").unwrap().starts_with("error unknown color"));
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut e = engine();
        let mut out = Vec::new();
        e.run("force add 3 3\nquit\nforce add 4 4\n".as_bytes(), &mut out).unwrap();
        assert!(e.is_done());
        assert_eq!(String::from_utf8(out).unwrap(), "ok\n");
    }
}
