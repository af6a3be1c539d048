//! The jayem layout for the Planck rev4

use crate::keymap::LayerTable;
use crate::make_keymap;

pub const ROWS: usize = 4;
pub const COLS: usize = 12;

pub type PlanckTable = LayerTable<ROWS, COLS>;

// For alignment with `vi]:EasyAlign <C-r>4<CR>*,
#[rustfmt::skip]
pub static KEYMAP: PlanckTable = make_keymap![
    // Qwerty
    [
        [Tab,          Q,    W,    E,    R,          T,             Y,    U,          I,    O,    P,    Bsp ],
        [(MT LGui Esc),A,    S,    D,    F,          G,             H,    J,          K,    L,    Scln, Quot],
        [(SC LSft 9),  Z,    X,    C,    V,          B,             N,    M,          Comm, Dot,  Slsh, Ent ],
        [Bsl,          LCtl, LAlt, LGui, (MO Lower), (LT Nav Spc),  Spc,  (MO Raise), RGui, RAlt, RCtl, Grv ],
    ],
    // Dvorak
    [
        [___,          Quot, Comm, Dot,  P,          Y,             F,    G,          C,    R,    L,    ___ ],
        [___,          A,    O,    E,    U,          I,             D,    H,          T,    N,    S,    Slsh],
        [___,          Scln, Q,    J,    K,          X,             B,    M,          W,    V,    Z,    ___ ],
        [___,          ___,  ___,  ___,  (MO Lower), (LT Nav Spc),  Spc,  (MO Raise), ___,  ___,  ___,  ___ ],
    ],
    // Lower: numbers, function keys and hex digits
    [
        [(LGui Grv),   F1,        F2,  F3,  F4,  F5,  F6,  F7,  F8,  F9,  F10, ___],
        [___,          1,         2,   3,   4,   5,   6,   7,   8,   9,   0,   ___],
        [___,          (LSft 3),  A,   B,   C,   D,   E,   F,   XXX, Dot, XXX, ___],
        [___,          ___,       ___, ___, ___, ___, Del, ___, ___, ___, ___, XXX],
    ],
    // Raise: symbols
    [
        [___, F11,       F12,         F13,       F14,         F15,         F16,      F17,        F18,         F19,         F20,       ___],
        [___, (LSft 1),  (LSft 2),    (LSft 3),  (LSft 4),    (LSft 5),    (LSft 6), (LSft 7),   (LSft 8),    (LSft Eql),  Eql,       ___],
        [___, (LSft 9),  (LSft LBrc), LBrc,      (LSft Comm), (LSft Min),  Min,      (LSft Dot), RBrc,        (LSft RBrc), (LSft 0),  ___],
        [___, ___,       ___,         ___,       ___,         Bsp,         ___,      ___,        ___,         ___,         ___,       XXX],
    ],
    // Nav
    [
        [XXX,  XXX,  XXX,  XXX,  XXX, XXX,          XXX,  XXX,  XXX, XXX,  XXX, XXX],
        [XXX,  Home, PgUp, PgDn, End, XXX,          Left, Down, Up,  Rght, XXX, XXX],
        [LSft, XXX,  XXX,  XXX,  XXX, XXX,          XXX,  XXX,  XXX, XXX,  XXX, XXX],
        [XXX,  ___,  ___,  ___,  XXX, (LT Nav Spc), XXX,  XXX,  XXX, XXX,  XXX, XXX],
    ],
    // Adjust: Lower + Raise
    [
        [(SYS Reset),   XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, (SYS DebugToggle)],
        [(DF Qwerty),   XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, (DF Dvorak)      ],
        [XXX,           XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX              ],
        [(SYS MusicOn), XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, XXX, (SYS MusicOff)   ],
    ],
];
