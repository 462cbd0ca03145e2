use std::mem;

use sprig_geom::{Matrix, Vec2};

use crate::{
    color::Color,
    error::{Error, Result},
    paint::{Painter, TextAlign},
};

/// A single recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    /// [`Painter::fill_rect`].
    FillRect {
        /// World matrix.
        world: Matrix,
        /// Local size.
        size: Vec2,
        /// Fill color.
        color: Color,
    },
    /// [`Painter::stroke_rect`].
    StrokeRect {
        /// World matrix.
        world: Matrix,
        /// Local size.
        size: Vec2,
        /// Stroke thickness.
        thickness: f32,
        /// Stroke color.
        color: Color,
    },
    /// [`Painter::fill_rounded_rect`].
    FillRoundedRect {
        /// World matrix.
        world: Matrix,
        /// Local size.
        size: Vec2,
        /// Corner roundness.
        roundness: f32,
        /// Fill color.
        color: Color,
    },
    /// [`Painter::text`].
    Text {
        /// World matrix.
        world: Matrix,
        /// Anchor in local space.
        origin: Vec2,
        /// The text.
        text: String,
        /// Font size.
        font_size: f32,
        /// Text color.
        color: Color,
        /// Anchor kind.
        align: TextAlign,
    },
}

impl DrawCall {
    /// The world matrix the call was issued under.
    pub fn world(&self) -> &Matrix {
        match self {
            Self::FillRect { world, .. }
            | Self::StrokeRect { world, .. }
            | Self::FillRoundedRect { world, .. }
            | Self::Text { world, .. } => world,
        }
    }
}

/// A [`Painter`] that records every call, optionally failing after a fixed
/// number of them.
#[derive(Debug, Default)]
pub struct RecordingPainter {
    /// Calls recorded so far.
    pub calls: Vec<DrawCall>,
    /// Fail every call once this many have been recorded.
    pub fail_after: Option<usize>,
}

impl RecordingPainter {
    /// Construct an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a recorder that fails once `n` calls have been recorded.
    pub fn failing_after(n: usize) -> Self {
        Self {
            calls: Vec::new(),
            fail_after: Some(n),
        }
    }

    /// Drain the recorded calls.
    pub fn take(&mut self) -> Vec<DrawCall> {
        mem::take(&mut self.calls)
    }

    /// Record `call`, or fail if the limit is reached.
    fn record(&mut self, call: DrawCall) -> Result<()> {
        if self.fail_after.is_some_and(|n| self.calls.len() >= n) {
            return Err(Error::Paint(format!(
                "recording painter limit of {} calls reached",
                self.calls.len()
            )));
        }
        self.calls.push(call);
        Ok(())
    }
}

impl Painter for RecordingPainter {
    fn fill_rect(&mut self, world: &Matrix, size: Vec2, color: Color) -> Result<()> {
        self.record(DrawCall::FillRect {
            world: *world,
            size,
            color,
        })
    }

    fn stroke_rect(
        &mut self,
        world: &Matrix,
        size: Vec2,
        thickness: f32,
        color: Color,
    ) -> Result<()> {
        self.record(DrawCall::StrokeRect {
            world: *world,
            size,
            thickness,
            color,
        })
    }

    fn fill_rounded_rect(
        &mut self,
        world: &Matrix,
        size: Vec2,
        roundness: f32,
        color: Color,
    ) -> Result<()> {
        self.record(DrawCall::FillRoundedRect {
            world: *world,
            size,
            roundness,
            color,
        })
    }

    fn text(
        &mut self,
        world: &Matrix,
        origin: Vec2,
        text: &str,
        font_size: f32,
        color: Color,
        align: TextAlign,
    ) -> Result<()> {
        self.record(DrawCall::Text {
            world: *world,
            origin,
            text: text.to_string(),
            font_size,
            color,
            align,
        })
    }
}
