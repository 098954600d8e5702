//! The door drawn in the window and its open/close animation

use super::assets;

/// Number of animation steps between closed and opened
pub const DOOR_FRAMES: u8 = 0x18;

/// Door tile rectangle inside the window map
pub const DOOR_X: u8 = 2;
pub const DOOR_Y: u8 = 2;
pub const DOOR_W: u8 = 12;
pub const DOOR_H: u8 = 6;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DoorState {
    #[default]
    Closed,
    Opening,
    Opened,
    Closing,
}

/// Door animation state: where it is in the film and where it's heading
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Door {
    pub state: DoorState,
    pub pos: u8,
}

impl Door {
    pub const CLOSED: Door = Door {
        state: DoorState::Closed,
        pos: 0,
    };

    /// Advance the animation by one frame
    ///
    /// Returns the film frame to draw, if the door moved.
    pub fn step(self) -> (Door, Option<u8>) {
        match self.state {
            DoorState::Opening => {
                let pos = self.pos.saturating_add(1).min(DOOR_FRAMES);
                let state = if pos == DOOR_FRAMES {
                    DoorState::Opened
                } else {
                    DoorState::Opening
                };
                (Door { state, pos }, Some(pos))
            }
            DoorState::Closing => {
                let pos = self.pos.saturating_sub(1);
                let state = if pos == 0 {
                    DoorState::Closed
                } else {
                    DoorState::Closing
                };
                (Door { state, pos }, Some(pos))
            }
            DoorState::Closed | DoorState::Opened => (self, None),
        }
    }

    /// START pressed: begin opening a closed door or closing an open one
    ///
    /// A door that is already moving ignores the request.
    pub fn toggle(self) -> Door {
        match self.state {
            DoorState::Closed => Door {
                state: DoorState::Opening,
                pos: 0,
            },
            DoorState::Opened => Door {
                state: DoorState::Closing,
                pos: DOOR_FRAMES,
            },
            DoorState::Opening | DoorState::Closing => self,
        }
    }
}

/// Window tiles for film frame `index` (`DOOR_W` x `DOOR_H`)
///
/// Frames cycle through the four door maps, sliding one tile row further
/// every four frames.
pub fn film(index: u8) -> &'static [u8] {
    let index = index.min(DOOR_FRAMES);
    let map = &assets::DOOR_MAPS[(index % 4) as usize];
    let start = (index / 4) as usize * DOOR_W as usize;
    &map[start..start + (DOOR_W as usize * DOOR_H as usize)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_open_takes_door_frames_steps() {
        let mut door = Door::CLOSED.toggle();
        assert_eq!(door, Door { state: DoorState::Opening, pos: 0 });
        for expected in 1..DOOR_FRAMES {
            let (next, frame) = door.step();
            assert_eq!(frame, Some(expected));
            assert_eq!(next.state, DoorState::Opening);
            door = next;
        }
        let (door, frame) = door.step();
        assert_eq!(frame, Some(DOOR_FRAMES));
        assert_eq!(door, Door { state: DoorState::Opened, pos: DOOR_FRAMES });
        assert_eq!(door.step(), (door, None));
    }

    #[test]
    fn test_close_returns_to_zero() {
        let mut door = Door { state: DoorState::Opened, pos: DOOR_FRAMES }.toggle();
        let mut frames = 0;
        while door.state == DoorState::Closing {
            let (next, frame) = door.step();
            assert_eq!(frame, Some(next.pos));
            door = next;
            frames += 1;
        }
        assert_eq!(frames, DOOR_FRAMES);
        assert_eq!(door, Door::CLOSED);
    }

    #[test]
    fn test_toggle_ignored_while_moving() {
        let opening = Door { state: DoorState::Opening, pos: 5 };
        assert_eq!(opening.toggle(), opening);
        let closing = Door { state: DoorState::Closing, pos: 5 };
        assert_eq!(closing.toggle(), closing);
    }

    #[test]
    fn test_film_frames() {
        assert_eq!(film(0), &assets::DOOR_MAPS[0][..72]);
        assert_eq!(film(5), &assets::DOOR_MAPS[1][12..84]);
        assert_eq!(film(DOOR_FRAMES), &assets::DOOR_MAPS[0][72..144]);
        for i in 0..=DOOR_FRAMES {
            assert_eq!(film(i).len(), 72);
        }
    }

    #[test]
    fn test_closed_door_fully_drawn_open_door_fully_gone() {
        assert!(film(0).iter().all(|&t| t != assets::DOOR_GAP_TILE));
        assert!(film(DOOR_FRAMES).iter().all(|&t| t == assets::DOOR_GAP_TILE));
    }
}
