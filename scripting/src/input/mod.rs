//! Keyboard and mouse polling across the engine boundary

use crate::port::EnginePort;
use std::sync::Arc;

/// Keys scripts can poll, carrying the code values the host's window
/// layer uses.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Space = 32,

    // Keyboard
    A = 65,
    B = 66,
    C = 67,
    D = 68,
    E = 69,
    F = 70,
    G = 71,
    H = 72,
    I = 73,
    J = 74,
    K = 75,
    L = 76,
    M = 77,
    N = 78,
    O = 79,
    P = 80,
    Q = 81,
    R = 82,
    S = 83,
    T = 84,
    U = 85,
    V = 86,
    W = 87,
    X = 88,
    Y = 89,
    Z = 90,

    // Function
    Enter = 257,

    // Arrows
    RightArrow = 262,
    LeftArrow = 263,
    DownArrow = 264,
    UpArrow = 265,

    // Modifiers
    LeftShift = 340,
    LeftControl = 341,
    RightShift = 344,
    RightControl = 345,
}

impl Key {
    /// The code value sent across the boundary
    pub const fn code(self) -> u32 {
        self as u32
    }
}

/// Mouse buttons scripts can poll
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left = 0,
    Right = 1,
    Middle = 3,
}

impl MouseButton {
    /// The code value sent across the boundary
    pub const fn code(self) -> u32 {
        self as u32
    }
}

/// Polling facade over the port.
///
/// Each call is one synchronous round trip; the host answers from
/// whatever device state it holds at that instant.
pub struct Input {
    port: Arc<dyn EnginePort>,
}

impl Input {
    pub fn new(port: Arc<dyn EnginePort>) -> Self {
        Self { port }
    }

    /// Whether `key` is held down right now
    pub fn is_key_down(&self, key: Key) -> bool {
        self.port.is_key_down(key)
    }

    /// Whether `button` is held down right now
    pub fn is_mouse_button_down(&self, button: MouseButton) -> bool {
        self.port.is_mouse_button_down(button)
    }

    /// Horizontal axis movement since the previous poll
    pub fn horizontal_axis_change(&self) -> f32 {
        self.port.horizontal_axis_change()
    }

    /// Vertical axis movement since the previous poll
    pub fn vertical_axis_change(&self) -> f32 {
        self.port.vertical_axis_change()
    }
}
