//! Workloads run against both `ByteBuffer` and `Vec<u8>`.

use std::fmt;
use std::hint::black_box;
use std::str::FromStr;

use bytebuf_core::{ByteBuffer, Fill};

use crate::error::{Error, Result};

/// A single timed workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    /// Allocate a sized buffer without initializing it
    Construct,
    /// Allocate a sized, zero-filled buffer
    ConstructFill,
    /// Deep-copy an existing buffer
    CopyConstruct,
    /// Copy-assign into a reused target
    AssignCopy,
    /// Move a buffer back and forth between two owners
    AssignMove,
    /// Grow a buffer one byte at a time at the end
    Append,
    /// Grow a buffer one byte at a time in the middle
    Insert,
    /// Shrink a buffer one byte at a time from the middle
    Erase,
    /// Sum every byte
    Iterate,
    /// Compare two equal buffers
    Equality,
}

impl Scenario {
    /// Every scenario in report order.
    pub const ALL: [Scenario; 10] = [
        Scenario::Construct,
        Scenario::ConstructFill,
        Scenario::CopyConstruct,
        Scenario::AssignCopy,
        Scenario::AssignMove,
        Scenario::Append,
        Scenario::Insert,
        Scenario::Erase,
        Scenario::Iterate,
        Scenario::Equality,
    ];

    /// Stable command-line name.
    pub fn name(self) -> &'static str {
        match self {
            Scenario::Construct => "construct",
            Scenario::ConstructFill => "construct-fill",
            Scenario::CopyConstruct => "copy-construct",
            Scenario::AssignCopy => "assign-copy",
            Scenario::AssignMove => "assign-move",
            Scenario::Append => "append",
            Scenario::Insert => "insert",
            Scenario::Erase => "erase",
            Scenario::Iterate => "iterate",
            Scenario::Equality => "equality",
        }
    }

    /// Default number of repetitions per timed run, before scaling.
    ///
    /// Quadratic workloads (append, insert, erase) repeat far less often.
    pub fn base_loops(self) -> usize {
        match self {
            Scenario::Construct | Scenario::ConstructFill => 25_000,
            Scenario::CopyConstruct | Scenario::AssignCopy => 10_000,
            Scenario::AssignMove | Scenario::Equality => 100_000,
            Scenario::Append | Scenario::Insert => 250,
            Scenario::Erase => 1_000,
            Scenario::Iterate => 10_000,
        }
    }

    /// Runs the workload on [`ByteBuffer`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Buffer`] if a buffer operation fails.
    pub fn run_buffer(self, elements: usize, loops: usize) -> Result<()> {
        match self {
            Scenario::Construct => {
                for _ in 0..loops {
                    let buf = ByteBuffer::with_size(elements, Fill::UNINITIALIZE)?;
                    black_box(&buf);
                }
            }
            Scenario::ConstructFill => {
                for _ in 0..loops {
                    let buf = ByteBuffer::with_size(elements, Fill::INITIALIZE)?;
                    black_box(&buf);
                }
            }
            Scenario::CopyConstruct => {
                let source = filled_buffer(elements)?;
                for _ in 0..loops {
                    let copy = source.try_clone()?;
                    black_box(&copy);
                }
            }
            Scenario::AssignCopy => {
                let source = filled_buffer(elements)?;
                let mut target = ByteBuffer::new();
                for _ in 0..loops {
                    target.assign(&source)?;
                    black_box(&target);
                }
            }
            Scenario::AssignMove => {
                let mut a = filled_buffer(elements)?;
                let mut b = ByteBuffer::new();
                for _ in 0..loops {
                    b = a.take();
                    black_box(&b);
                    a = b.take();
                    black_box(&a);
                }
                black_box(&b);
            }
            Scenario::Append => {
                for _ in 0..loops {
                    let mut buf = ByteBuffer::new();
                    for i in 0..elements {
                        buf.append(&[low_byte(i)])?;
                    }
                    black_box(&buf);
                }
            }
            Scenario::Insert => {
                for _ in 0..loops {
                    let mut buf = ByteBuffer::new();
                    for i in 0..elements {
                        buf.insert(buf.len() / 2, &[low_byte(i)])?;
                    }
                    black_box(&buf);
                }
            }
            Scenario::Erase => {
                for _ in 0..loops {
                    let mut buf = ByteBuffer::with_size(elements, Fill::INITIALIZE)?;
                    while !buf.is_empty() {
                        buf.erase(buf.len() / 2)?;
                    }
                    black_box(&buf);
                }
            }
            Scenario::Iterate => {
                let buf = filled_buffer(elements)?;
                for _ in 0..loops {
                    let sum: u64 = buf.iter().map(|&b| u64::from(b)).sum();
                    black_box(sum);
                }
            }
            Scenario::Equality => {
                let a = filled_buffer(elements)?;
                let b = a.try_clone()?;
                for _ in 0..loops {
                    black_box(black_box(&a) == black_box(&b));
                }
            }
        }

        Ok(())
    }

    /// Runs the same workload on `Vec<u8>`.
    pub fn run_vec(self, elements: usize, loops: usize) {
        match self {
            Scenario::Construct | Scenario::ConstructFill => {
                for _ in 0..loops {
                    let vec = vec![0u8; elements];
                    black_box(&vec);
                }
            }
            Scenario::CopyConstruct => {
                let source = vec![1u8; elements];
                for _ in 0..loops {
                    let copy = source.clone();
                    black_box(&copy);
                }
            }
            Scenario::AssignCopy => {
                let source = vec![1u8; elements];
                let mut target = Vec::new();
                for _ in 0..loops {
                    target.clone_from(&source);
                    black_box(&target);
                }
            }
            Scenario::AssignMove => {
                let mut a = vec![1u8; elements];
                let mut b = Vec::new();
                for _ in 0..loops {
                    b = std::mem::take(&mut a);
                    black_box(&b);
                    a = std::mem::take(&mut b);
                    black_box(&a);
                }
                black_box(&b);
            }
            Scenario::Append => {
                for _ in 0..loops {
                    let mut vec = Vec::new();
                    for i in 0..elements {
                        vec.push(low_byte(i));
                    }
                    black_box(&vec);
                }
            }
            Scenario::Insert => {
                for _ in 0..loops {
                    let mut vec = Vec::new();
                    for i in 0..elements {
                        vec.insert(vec.len() / 2, low_byte(i));
                    }
                    black_box(&vec);
                }
            }
            Scenario::Erase => {
                for _ in 0..loops {
                    let mut vec = vec![0u8; elements];
                    while !vec.is_empty() {
                        vec.remove(vec.len() / 2);
                    }
                    black_box(&vec);
                }
            }
            Scenario::Iterate => {
                let vec = vec![1u8; elements];
                for _ in 0..loops {
                    let sum: u64 = vec.iter().map(|&b| u64::from(b)).sum();
                    black_box(sum);
                }
            }
            Scenario::Equality => {
                let a = vec![1u8; elements];
                let b = a.clone();
                for _ in 0..loops {
                    black_box(black_box(&a) == black_box(&b));
                }
            }
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownScenario(s.to_string()))
    }
}

/// Parses a scenario name for clap.
///
/// # Errors
///
/// Returns [`Error::UnknownScenario`] if the name matches no scenario.
pub fn parse_scenario(s: &str) -> Result<Scenario> {
    s.parse()
}

/// Buffer of `elements` bytes all set to one.
fn filled_buffer(elements: usize) -> Result<ByteBuffer> {
    let mut buf = ByteBuffer::with_size(elements, Fill::UNINITIALIZE)?;
    buf.fill(1);
    Ok(buf)
}

/// Truncates a loop counter to its low byte.
#[allow(clippy::cast_possible_truncation)]
fn low_byte(i: usize) -> u8 {
    i as u8
}
