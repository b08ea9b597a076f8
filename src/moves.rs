use anyhow::Result;
use serde::ser::SerializeMap;
use serde::Serialize;

/// Sink for the movetext stream, called in document order by the parser.
/// Comment and move text arrive as found in the source, untrimmed.
pub trait MoveBuilder {
    type Moves;

    fn comment_before_first_move(&mut self, text: &str) -> Result<()>;

    fn comment(&mut self, text: &str) -> Result<()>;

    fn begin_variation(&mut self) -> Result<()>;

    fn end_variation(&mut self) -> Result<()>;

    /// One movetext token, move numbers already stripped. Game terminators
    /// (`1-0`, `0-1`, `1/2-1/2`, `*`) arrive here unfiltered.
    fn san_move(&mut self, text: &str) -> Result<()>;

    fn into_moves(self) -> Self::Moves;
}

/// One line of play: leading comments and the moves played on it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Variation {
    pub comments: Vec<String>,
    pub moves: Vec<MoveNode>,
}

impl Variation {
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty() && self.moves.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MoveNode {
    pub san: String,
    pub comments: Vec<String>,
    pub variations: Vec<Variation>,
}

impl MoveNode {
    pub fn new(san: &str) -> MoveNode {
        MoveNode {
            san: san.to_string(),
            comments: Vec::new(),
            variations: Vec::new(),
        }
    }
}

fn is_game_result(text: &str) -> bool {
    matches!(text, "1-0" | "0-1" | "1/2-1/2" | "*")
}

/// Default [`MoveBuilder`]: assembles the stream into a [`Variation`] tree.
/// Trims comment text, drops game terminators, and tolerates unbalanced
/// variation markers (missing close closed at end of input, stray close
/// ignored, empty branch discarded).
pub struct MoveTreeBuilder {
    stack: Vec<Variation>,
}

impl Default for MoveTreeBuilder {
    fn default() -> MoveTreeBuilder {
        MoveTreeBuilder {
            stack: vec![Variation::default()],
        }
    }
}

impl MoveTreeBuilder {
    fn current_line(&mut self) -> &mut Variation {
        if self.stack.is_empty() {
            self.stack.push(Variation::default());
        }
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    fn close_top(&mut self) {
        let Some(finished) = self.stack.pop() else {
            return;
        };
        let parent = self.current_line();
        match parent.moves.last_mut() {
            Some(node) => {
                if !finished.is_empty() {
                    node.variations.push(finished);
                }
            }
            None => {
                // Nothing to branch from; splice the content into the
                // enclosing line instead.
                parent.comments.extend(finished.comments);
                parent.moves.extend(finished.moves);
            }
        }
    }
}

impl MoveBuilder for MoveTreeBuilder {
    type Moves = Variation;

    fn comment_before_first_move(&mut self, text: &str) -> Result<()> {
        if self.stack.is_empty() {
            self.stack.push(Variation::default());
        }
        self.stack[0].comments.push(text.trim().to_string());
        Ok(())
    }

    fn comment(&mut self, text: &str) -> Result<()> {
        let text = text.trim().to_string();
        let line = self.current_line();
        match line.moves.last_mut() {
            Some(node) => node.comments.push(text),
            None => line.comments.push(text),
        }
        Ok(())
    }

    fn begin_variation(&mut self) -> Result<()> {
        self.stack.push(Variation::default());
        Ok(())
    }

    fn end_variation(&mut self) -> Result<()> {
        if self.stack.len() > 1 {
            self.close_top();
        }
        Ok(())
    }

    fn san_move(&mut self, text: &str) -> Result<()> {
        if is_game_result(text) {
            return Ok(());
        }
        self.current_line().moves.push(MoveNode::new(text));
        Ok(())
    }

    fn into_moves(mut self) -> Variation {
        while self.stack.len() > 1 {
            self.close_top();
        }
        self.stack.into_iter().next().unwrap_or_default()
    }
}

impl Serialize for Variation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let entries = 1 + usize::from(!self.comments.is_empty());
        let mut map = serializer.serialize_map(Some(entries))?;
        if !self.comments.is_empty() {
            map.serialize_entry("comments", &self.comments)?;
        }
        map.serialize_entry("moves", &self.moves)?;
        map.end()
    }
}

impl Serialize for MoveNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let entries = 1
            + usize::from(!self.comments.is_empty())
            + usize::from(!self.variations.is_empty());
        let mut map = serializer.serialize_map(Some(entries))?;
        map.serialize_entry("san", &self.san)?;
        if !self.comments.is_empty() {
            map.serialize_entry("comments", &self.comments)?;
        }
        if !self.variations.is_empty() {
            map.serialize_entry("variations", &self.variations)?;
        }
        map.end()
    }
}
