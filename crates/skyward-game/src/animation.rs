//! Sprite-sheet animation playback
//!
//! An [`Animation`] plays one [`AnimationClip`] at a time: a run of frames
//! on a horizontal sprite strip, each shown for a fixed duration.

use glam::Vec2;
use skyward_assets::ImageHandle;
use skyward_core::Facing;

/// Frame layout and timing for one animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationClip {
    /// Number of frames on the sprite strip
    pub frame_count: u32,
    /// Seconds each frame stays on screen
    pub frame_duration: f32,
    /// Sprite strip the frames are cut from
    pub image: ImageHandle,
    /// Restart from `start_frame` after the last frame
    pub looping: bool,
    /// First frame played
    pub start_frame: u32,
    /// Exclusive end frame, when only part of the strip is played
    pub end_frame: Option<u32>,
}

impl AnimationClip {
    /// A clip that plays forever
    pub fn looping(frame_count: u32, frame_duration: f32, image: ImageHandle) -> Self {
        Self {
            frame_count,
            frame_duration,
            image,
            looping: true,
            start_frame: 0,
            end_frame: None,
        }
    }

    /// A clip that plays once and holds its last frame
    pub fn once(frame_count: u32, frame_duration: f32, image: ImageHandle) -> Self {
        Self {
            looping: false,
            ..Self::looping(frame_count, frame_duration, image)
        }
    }

    pub fn starting_at(mut self, frame: u32) -> Self {
        self.start_frame = frame;
        self
    }

    pub fn ending_at(mut self, frame: u32) -> Self {
        self.end_frame = Some(frame);
        self
    }

    /// Index of the last frame this clip shows
    pub fn last_frame(&self) -> u32 {
        let end = self
            .end_frame
            .unwrap_or(self.frame_count)
            .min(self.frame_count);
        end.saturating_sub(1).max(self.first_frame())
    }

    fn first_frame(&self) -> u32 {
        self.start_frame.min(self.frame_count.saturating_sub(1))
    }

    /// Frames actually played, start to end
    pub fn played_frames(&self) -> u32 {
        self.last_frame() - self.first_frame() + 1
    }

    /// Time a one-shot play takes to complete
    pub fn duration(&self) -> f32 {
        self.played_frames() as f32 * self.frame_duration
    }
}

/// What a renderer needs to draw the current frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteDraw {
    pub image: ImageHandle,
    pub frame: u32,
    pub frame_count: u32,
    pub position: Vec2,
    pub facing: Facing,
}

/// Playback state for the clip currently shown
#[derive(Debug, Clone)]
pub struct Animation {
    clip: AnimationClip,
    frame: u32,
    elapsed: f32,
    finished: bool,
    configure_count: u64,
}

impl Animation {
    pub fn new(clip: AnimationClip) -> Self {
        Self {
            frame: clip.first_frame(),
            clip,
            elapsed: 0.0,
            finished: false,
            configure_count: 0,
        }
    }

    /// Swap to another clip and restart playback
    pub fn configure(&mut self, clip: AnimationClip) {
        self.clip = clip;
        self.frame = clip.first_frame();
        self.elapsed = 0.0;
        self.finished = false;
        self.configure_count += 1;
    }

    /// Advance playback by `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        if self.finished {
            return;
        }

        if self.clip.frame_duration <= 0.0 {
            // Zero-length frames: one-shots end immediately, loops stay put
            if !self.clip.looping {
                self.frame = self.clip.last_frame();
                self.finished = true;
            }
            return;
        }

        self.elapsed += dt;
        while self.elapsed >= self.clip.frame_duration {
            self.elapsed -= self.clip.frame_duration;
            if self.frame < self.clip.last_frame() {
                self.frame += 1;
            } else if self.clip.looping {
                self.frame = self.clip.first_frame();
            } else {
                self.finished = true;
                self.elapsed = 0.0;
                break;
            }
        }
    }

    /// Whether a one-shot clip has played its last frame in full.
    /// Looping clips never complete.
    pub fn is_complete(&self) -> bool {
        self.finished
    }

    pub fn current_frame(&self) -> u32 {
        self.frame
    }

    pub fn clip(&self) -> &AnimationClip {
        &self.clip
    }

    /// How many times the clip has been swapped since creation
    pub fn configure_count(&self) -> u64 {
        self.configure_count
    }

    pub fn draw(&self, position: Vec2, facing: Facing) -> SpriteDraw {
        SpriteDraw {
            image: self.clip.image,
            frame: self.frame,
            frame_count: self.clip.frame_count,
            position,
            facing,
        }
    }
}
