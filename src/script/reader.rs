//! Whitespace-token animation scripts.
//!
//! ```text
//! rectangle name R min-x 200 min-y 200 width 50 height 100 color 1 0 0 from 1 to 100
//! move name R moveto 200 200 300 300 from 10 to 50
//! ```
//!
//! Each record starts with a command keyword followed by `attribute value...` pairs in any
//! order. A record ends as soon as every attribute of its command has been seen.

use std::{collections::HashMap, path::Path};

use anyhow::Context as _;

use crate::{
    foundation::core::Tick,
    foundation::error::{AnimatorError, AnimatorResult},
    script::builder::TweenModelBuilder,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Rectangle,
    Oval,
    Move,
    ChangeColor,
    Scale,
}

impl Command {
    fn parse(word: &str) -> Option<Self> {
        Some(match word {
            "rectangle" => Self::Rectangle,
            "oval" => Self::Oval,
            "move" => Self::Move,
            "change-color" => Self::ChangeColor,
            "scale" => Self::Scale,
            _ => return None,
        })
    }

    fn keyword(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Oval => "oval",
            Self::Move => "move",
            Self::ChangeColor => "change-color",
            Self::Scale => "scale",
        }
    }

    /// Numeric attributes besides `name`, `from` and `to`, with their value counts.
    fn numeric_attrs(self) -> &'static [(&'static str, usize)] {
        match self {
            Self::Rectangle => &[
                ("min-x", 1),
                ("min-y", 1),
                ("width", 1),
                ("height", 1),
                ("color", 3),
            ],
            Self::Oval => &[
                ("center-x", 1),
                ("center-y", 1),
                ("x-radius", 1),
                ("y-radius", 1),
                ("color", 3),
            ],
            Self::Move => &[("moveto", 4)],
            Self::ChangeColor => &[("colorto", 6)],
            Self::Scale => &[("scaleto", 4)],
        }
    }
}

struct Tokens<'a> {
    iter: Box<dyn Iterator<Item = (usize, &'a str)> + 'a>,
    line: usize,
}

impl<'a> Tokens<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            iter: Box::new(
                src.lines()
                    .enumerate()
                    .flat_map(|(i, line)| line.split_whitespace().map(move |w| (i + 1, w))),
            ),
            line: 1,
        }
    }

    fn next_opt(&mut self) -> Option<&'a str> {
        let (line, word) = self.iter.next()?;
        self.line = line;
        Some(word)
    }

    fn next(&mut self, wanted: &str) -> AnimatorResult<&'a str> {
        let line = self.line;
        self.next_opt().ok_or_else(|| {
            AnimatorError::script(format!(
                "line {line}: unexpected end of input, expected {wanted}"
            ))
        })
    }

    fn number(&mut self, attr: &str) -> AnimatorResult<f64> {
        let word = self.next(attr)?;
        word.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| {
                AnimatorError::script(format!(
                    "line {}: '{word}' is not a number (attribute '{attr}')",
                    self.line
                ))
            })
    }

    fn tick(&mut self, attr: &str) -> AnimatorResult<Tick> {
        let word = self.next(attr)?;
        word.parse::<Tick>().map_err(|_| {
            AnimatorError::script(format!(
                "line {}: '{word}' is not an integer tick (attribute '{attr}')",
                self.line
            ))
        })
    }
}

/// Attribute values collected for one record.
struct Record<'a> {
    command: Command,
    name: Option<&'a str>,
    start: Option<Tick>,
    end: Option<Tick>,
    values: HashMap<&'static str, Vec<f64>>,
}

impl<'a> Record<'a> {
    fn read(command: Command, tokens: &mut Tokens<'a>) -> AnimatorResult<Self> {
        let mut rec = Self {
            command,
            name: None,
            start: None,
            end: None,
            values: HashMap::new(),
        };
        while !rec.is_complete() {
            let attr = tokens.next(&format!("an attribute of '{}'", command.keyword()))?;
            match attr {
                "name" => rec.name = Some(tokens.next("a shape name")?),
                "from" => rec.start = Some(tokens.tick(attr)?),
                "to" => rec.end = Some(tokens.tick(attr)?),
                _ => {
                    let Some(&(key, count)) =
                        command.numeric_attrs().iter().find(|(k, _)| *k == attr)
                    else {
                        return Err(AnimatorError::script(format!(
                            "line {}: invalid attribute '{attr}' for {}",
                            tokens.line,
                            command.keyword()
                        )));
                    };
                    let vals = (0..count)
                        .map(|_| tokens.number(key))
                        .collect::<AnimatorResult<Vec<f64>>>()?;
                    rec.values.insert(key, vals);
                }
            }
        }
        Ok(rec)
    }

    fn is_complete(&self) -> bool {
        self.name.is_some()
            && self.start.is_some()
            && self.end.is_some()
            && self
                .command
                .numeric_attrs()
                .iter()
                .all(|(k, _)| self.values.contains_key(k))
    }

    /// Only called on complete records.
    fn vals(&self, key: &str) -> &[f64] {
        self.values.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    fn one(&self, key: &str) -> f64 {
        self.vals(key).first().copied().unwrap_or_default()
    }

    fn apply<B: TweenModelBuilder>(&self, b: &mut B) -> AnimatorResult<()> {
        let name = self.name.unwrap_or_default();
        let (start, end) = (self.start.unwrap_or_default(), self.end.unwrap_or_default());
        let v = |key: &str, i: usize| self.vals(key).get(i).copied().unwrap_or_default();
        match self.command {
            Command::Rectangle => b.add_rectangle(
                name,
                self.one("min-x"),
                self.one("min-y"),
                self.one("width"),
                self.one("height"),
                v("color", 0),
                v("color", 1),
                v("color", 2),
                start,
                end,
            ),
            Command::Oval => b.add_oval(
                name,
                self.one("center-x"),
                self.one("center-y"),
                self.one("x-radius"),
                self.one("y-radius"),
                v("color", 0),
                v("color", 1),
                v("color", 2),
                start,
                end,
            ),
            Command::Move => b.add_move(
                name,
                v("moveto", 0),
                v("moveto", 1),
                v("moveto", 2),
                v("moveto", 3),
                start,
                end,
            ),
            Command::ChangeColor => b.add_color_change(
                name,
                v("colorto", 0),
                v("colorto", 1),
                v("colorto", 2),
                v("colorto", 3),
                v("colorto", 4),
                v("colorto", 5),
                start,
                end,
            ),
            Command::Scale => b.add_scale_to_change(
                name,
                v("scaleto", 0),
                v("scaleto", 1),
                v("scaleto", 2),
                v("scaleto", 3),
                start,
                end,
            ),
        }?;
        Ok(())
    }
}

/// Parse `src` and feed every record to `builder`, returning what it builds.
pub fn read_str<B: TweenModelBuilder>(src: &str, mut builder: B) -> AnimatorResult<B::Output> {
    let mut tokens = Tokens::new(src);
    let mut records = 0usize;
    while let Some(word) = tokens.next_opt() {
        let command = Command::parse(word).ok_or_else(|| {
            AnimatorError::script(format!(
                "line {}: unidentified token '{word}'",
                tokens.line
            ))
        })?;
        Record::read(command, &mut tokens)?.apply(&mut builder)?;
        records += 1;
    }
    tracing::debug!(records, "script read");
    Ok(builder.build())
}

#[tracing::instrument(skip(builder))]
pub fn read_file<B: TweenModelBuilder>(path: &Path, builder: B) -> AnimatorResult<B::Output> {
    let src = std::fs::read_to_string(path)
        .with_context(|| format!("read animation script '{}'", path.display()))?;
    read_str(&src, builder)
}

#[cfg(test)]
#[path = "../../tests/unit/script/reader.rs"]
mod tests;
