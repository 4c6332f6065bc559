//! Render sinks: where snapshots go after every frame and command.

use std::io::Write;

use anyhow::Result;

use crate::core::GameSnapshot;

/// Receives the latest game snapshot.
pub trait RenderSink {
    fn present(&mut self, snapshot: &GameSnapshot) -> Result<()>;
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn present(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        (**self).present(snapshot)
    }
}

impl<S: RenderSink + ?Sized> RenderSink for Box<S> {
    fn present(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        (**self).present(snapshot)
    }
}

/// An absent sink accepts everything.
impl<S: RenderSink> RenderSink for Option<S> {
    fn present(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        match self {
            Some(sink) => sink.present(snapshot),
            None => Ok(()),
        }
    }
}

/// Presents to both sinks, first one first.
impl<A: RenderSink, B: RenderSink> RenderSink for (A, B) {
    fn present(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        self.0.present(snapshot)?;
        self.1.present(snapshot)
    }
}

/// Writes one JSON object per snapshot, newline terminated.
pub struct JsonLinesSink<W: Write> {
    out: W,
    buf: Vec<u8>,
    written: u64,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(4096),
            written: 0,
        }
    }

    /// Number of snapshots written so far
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSink for JsonLinesSink<W> {
    fn present(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        self.buf.clear();
        serde_json::to_writer(&mut self.buf, snapshot)?;
        self.buf.push(b'\n');
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        self.written += 1;
        Ok(())
    }
}

/// Keeps every presented snapshot in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub frames: Vec<GameSnapshot>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&GameSnapshot> {
        self.frames.last()
    }
}

impl RenderSink for RecordingSink {
    fn present(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        self.frames.push(*snapshot);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    #[test]
    fn json_lines_one_object_per_line() {
        let mut state = GameState::new(3);
        state.start();

        let mut sink = JsonLinesSink::new(Vec::new());
        sink.present(&state.snapshot()).unwrap();
        sink.present(&state.snapshot()).unwrap();
        assert_eq!(sink.written(), 2);

        let text = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(value["phase"], "running");
        assert_eq!(value["level"], 1);
        assert_eq!(value["dropIntervalMs"], 1000);
        assert_eq!(value["board"].as_array().unwrap().len(), 20);
        assert!(value["current"]["shape"].is_array());
    }

    #[test]
    fn option_and_pair_fan_out() {
        let snap = GameSnapshot::default();
        let mut pair = (RecordingSink::new(), None::<RecordingSink>);
        pair.present(&snap).unwrap();
        assert_eq!(pair.0.frames.len(), 1);

        let mut both = (RecordingSink::new(), Some(RecordingSink::new()));
        both.present(&snap).unwrap();
        assert_eq!(both.1.as_ref().map(|s| s.frames.len()), Some(1));
    }
}
