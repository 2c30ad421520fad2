//! Tokenization for template engine
//!
//! Splits template text into classified [`Fragment`]s in a single
//! forward-only pass.

use crate::template::error::TemplateError;

/// Fragment classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    /// Literal text outside any delimiter
    Text,
    /// `{{ expr }}`
    Variable,
    /// `{% keyword ... %}`
    OpenBlock,
    /// `{% end... %}`
    CloseBlock,
}

/// A classified slice of template text
///
/// `raw` borrows from the template source and still carries its
/// delimiters; [`Fragment::clean`] strips them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
    /// Fragment classification
    pub kind: FragmentKind,
    /// Raw text including delimiters
    pub raw: &'a str,
    /// Line number where the fragment starts
    pub line: usize,
}

impl<'a> Fragment<'a> {
    /// Raw text with delimiters and surrounding whitespace stripped
    ///
    /// Text fragments are returned verbatim.
    pub fn clean(&self) -> &'a str {
        match self.kind {
            FragmentKind::Text => self.raw,
            _ => self.raw[DELIMITER_LEN..self.raw.len() - DELIMITER_LEN].trim(),
        }
    }

    /// Leading word of the cleaned text (the tag keyword for block fragments)
    pub fn keyword(&self) -> &'a str {
        self.clean().split_whitespace().next().unwrap_or("")
    }
}

/// Delimiters are all two bytes wide
const DELIMITER_LEN: usize = 2;

/// Reserved prefix that turns a block tag into a close tag
const END_PREFIX: &str = "end";

/// Delimiter families recognised after a `{`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Delimiter {
    /// `{{ ... }}`
    Variable,
    /// `{% ... %}`
    Block,
    /// `{# ... #}`
    Comment,
}

impl Delimiter {
    fn from_second_byte(byte: u8) -> Option<Self> {
        match byte {
            b'{' => Some(Delimiter::Variable),
            b'%' => Some(Delimiter::Block),
            b'#' => Some(Delimiter::Comment),
            _ => None,
        }
    }

    /// First byte of the closing delimiter
    fn close_byte(self) -> u8 {
        match self {
            Delimiter::Variable => b'}',
            Delimiter::Block => b'%',
            Delimiter::Comment => b'#',
        }
    }

    fn opening(self) -> &'static str {
        match self {
            Delimiter::Variable => "{{",
            Delimiter::Block => "{%",
            Delimiter::Comment => "{#",
        }
    }
}

/// Tokenization state machine
///
/// # State Transitions
///
/// ```text
/// Text ──{──> SeenLBrace ──{ % #──> InTag ──close──> SeenClose ──}──> [Yield] → Text
///  ▲              │                   ▲                 │
///  └──(other)─────┘                   └────(other)──────┘
/// ```
///
/// Every byte is visited once; reprocessing a byte after a failed
/// two-byte match never moves the position backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ScanState {
    /// Scanning literal text that began at `start`
    Text { start: usize, line: usize },

    /// Seen a `{` that may open a tag
    SeenLBrace {
        text_start: usize,
        text_line: usize,
        brace: usize,
    },

    /// Inside a tag opened at `start`
    InTag {
        delimiter: Delimiter,
        start: usize,
        line: usize,
    },

    /// Seen the first byte of the closing delimiter
    SeenClose {
        delimiter: Delimiter,
        start: usize,
        line: usize,
    },
}

/// Iterator over the fragments of a template string
///
/// Yields `Err` once for an unclosed delimiter and then stops.
///
/// ```ignore
/// let mut stream = FragmentStream::new("Hello {{ name }}");
/// assert_eq!(stream.next().unwrap()?.kind, FragmentKind::Text);
/// ```
pub struct FragmentStream<'a> {
    source: &'a str,
    bytes: &'a [u8],
    pos: usize,
    line: usize,
    state: ScanState,
    finished: bool,
}

impl<'a> FragmentStream<'a> {
    /// Create a new stream over template text
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            bytes: source.as_bytes(),
            pos: 0,
            line: 1,
            state: ScanState::Text { start: 0, line: 1 },
            finished: false,
        }
    }

    fn text(&self, start: usize, end: usize, line: usize) -> Option<Fragment<'a>> {
        (end > start).then(|| Fragment {
            kind: FragmentKind::Text,
            raw: &self.source[start..end],
            line,
        })
    }

    /// Classify a completed tag spanning `start..end`
    fn tag(
        &self,
        delimiter: Delimiter,
        start: usize,
        end: usize,
        line: usize,
    ) -> Option<Fragment<'a>> {
        let raw = &self.source[start..end];
        let kind = match delimiter {
            Delimiter::Comment => return None,
            Delimiter::Variable => FragmentKind::Variable,
            Delimiter::Block => {
                let inner = raw[DELIMITER_LEN..raw.len() - DELIMITER_LEN].trim();
                if inner.starts_with(END_PREFIX) {
                    FragmentKind::CloseBlock
                } else {
                    FragmentKind::OpenBlock
                }
            }
        };
        Some(Fragment { kind, raw, line })
    }

    /// Flush whatever is pending at end of input
    fn finish(&mut self) -> Option<Result<Fragment<'a>, TemplateError>> {
        self.finished = true;
        match self.state {
            ScanState::Text { start, line }
            | ScanState::SeenLBrace {
                text_start: start,
                text_line: line,
                ..
            } => self.text(start, self.bytes.len(), line).map(Ok),
            ScanState::InTag {
                delimiter, line, ..
            }
            | ScanState::SeenClose {
                delimiter, line, ..
            } => Some(Err(TemplateError::UnclosedDelimiter {
                delimiter: delimiter.opening(),
                line,
            })),
        }
    }

    /// Advance over one byte. Returns a fragment when one completes.
    fn step(&mut self, byte: u8) -> Option<Fragment<'a>> {
        match self.state {
            ScanState::Text { start, line } => {
                if byte == b'{' {
                    self.state = ScanState::SeenLBrace {
                        text_start: start,
                        text_line: line,
                        brace: self.pos,
                    };
                }
                self.advance(byte);
                None
            }
            ScanState::SeenLBrace {
                text_start,
                text_line,
                brace,
            } => match Delimiter::from_second_byte(byte) {
                Some(delimiter) => {
                    self.state = ScanState::InTag {
                        delimiter,
                        start: brace,
                        line: self.line,
                    };
                    self.advance(byte);
                    self.text(text_start, brace, text_line)
                }
                None => {
                    // Not a tag; reprocess this byte as text
                    self.state = ScanState::Text {
                        start: text_start,
                        line: text_line,
                    };
                    None
                }
            },
            ScanState::InTag {
                delimiter,
                start,
                line,
            } => {
                if byte == delimiter.close_byte() {
                    self.state = ScanState::SeenClose {
                        delimiter,
                        start,
                        line,
                    };
                }
                self.advance(byte);
                None
            }
            ScanState::SeenClose {
                delimiter,
                start,
                line,
            } => {
                if byte == b'}' {
                    self.advance(byte);
                    self.state = ScanState::Text {
                        start: self.pos,
                        line: self.line,
                    };
                    self.tag(delimiter, start, self.pos, line)
                } else {
                    self.state = ScanState::InTag {
                        delimiter,
                        start,
                        line,
                    };
                    None
                }
            }
        }
    }

    #[inline]
    fn advance(&mut self, byte: u8) {
        if byte == b'\n' {
            self.line += 1;
        }
        self.pos += 1;
    }
}

impl<'a> Iterator for FragmentStream<'a> {
    type Item = Result<Fragment<'a>, TemplateError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        while self.pos < self.bytes.len() {
            let byte = self.bytes[self.pos];
            if let Some(fragment) = self.step(byte) {
                return Some(Ok(fragment));
            }
        }

        self.finish()
    }
}

impl std::iter::FusedIterator for FragmentStream<'_> {}
