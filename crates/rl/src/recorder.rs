/// Sink for full-state frames produced while an episode runs.
pub trait Recorder {
    fn record(&mut self, frame: &[f32]);
    fn frame_count(&self) -> usize;
}

/// Stores fixed-width frames back to back in a single buffer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrajectoryRecorder {
    frame_len: usize,
    data: Vec<f32>,
}

impl TrajectoryRecorder {
    #[must_use]
    pub fn new(frame_len: usize) -> Self {
        Self {
            frame_len,
            data: Vec::new(),
        }
    }

    #[must_use]
    pub fn frame(&self, index: usize) -> Option<&[f32]> {
        self.frames().nth(index)
    }

    pub fn frames(&self) -> impl Iterator<Item = &[f32]> {
        self.data.chunks_exact(self.frame_len.max(1))
    }

    /// Raw little-endian view of every recorded value, for bit-exact comparison and dumps.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}

impl Recorder for TrajectoryRecorder {
    fn record(&mut self, frame: &[f32]) {
        assert_eq!(
            frame.len(),
            self.frame_len,
            "frame width changed mid-trajectory"
        );
        self.data.extend_from_slice(frame);
    }

    fn frame_count(&self) -> usize {
        if self.frame_len == 0 {
            0
        } else {
            self.data.len() / self.frame_len
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_come_back_in_order() {
        let mut rec = TrajectoryRecorder::new(2);
        rec.record(&[1.0, 2.0]);
        rec.record(&[3.0, 4.0]);
        assert_eq!(rec.frame_count(), 2);
        assert_eq!(rec.frame(1), Some(&[3.0, 4.0][..]));
        assert_eq!(rec.as_bytes().len(), 16);
        rec.clear();
        assert_eq!(rec.frame_count(), 0);
    }

    #[test]
    #[should_panic(expected = "frame width changed")]
    fn rejects_mismatched_frame() {
        TrajectoryRecorder::new(4).record(&[0.0; 6]);
    }
}
