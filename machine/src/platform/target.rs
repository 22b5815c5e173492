//! Target descriptors and the board selection table.
//!
//! This file is compiled twice: as `machine::platform::target`, and by
//! `build.rs`, which runs [`resolve`] against the enabled cargo features and
//! aborts the build when the selection is empty, ambiguous or inconsistent.
//! It must therefore only depend on `core`.

use core::fmt;

/// Instruction-set family a board's core belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ArchFamily {
    /// ARMv6-M / ARMv7-M / ARMv8-M cores.
    CortexM,
    /// RV32 cores running in machine mode.
    RiscV,
}

impl ArchFamily {
    /// Cargo feature naming this family.
    pub const fn feature(self) -> &'static str {
        match self {
            ArchFamily::CortexM => "cortexm",
            ArchFamily::RiscV => "riscv",
        }
    }

    /// Whether code for this family executes on rustc's `target_arch`.
    pub fn runs_on(self, target_arch: &str) -> bool {
        match self {
            ArchFamily::CortexM => target_arch == "arm",
            ArchFamily::RiscV => target_arch == "riscv32",
        }
    }
}

/// The (architecture family, board) pair fixed for one build.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TargetDescriptor {
    pub arch: ArchFamily,
    pub board: &'static str,
}

/// One row of the board table: a board, the chip it carries and the
/// chip's architecture family. Each name doubles as a cargo feature.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BoardEntry {
    pub board: &'static str,
    pub chip: &'static str,
    pub arch: ArchFamily,
}

impl BoardEntry {
    pub const fn descriptor(&self) -> TargetDescriptor {
        TargetDescriptor {
            arch: self.arch,
            board: self.board,
        }
    }
}

/// Every supported board. Adding a board adds a row; existing rows never change.
pub const BOARDS: &[BoardEntry] = &[
    BoardEntry {
        board: "hifive1b",
        chip: "fe310",
        arch: ArchFamily::RiscV,
    },
    BoardEntry {
        board: "pca10056",
        chip: "nrf52840",
        arch: ArchFamily::CortexM,
    },
    BoardEntry {
        board: "feather-nrf52840",
        chip: "nrf52840",
        arch: ArchFamily::CortexM,
    },
];

/// Why a feature set does not select exactly one board.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SelectError<'a> {
    /// No board feature is enabled.
    NoBoard,
    /// More than one board feature is enabled.
    MultipleBoards(&'static str, &'static str),
    /// Two table rows claim the same board.
    DuplicateBoard(&'static str),
    /// A chip or architecture feature that the selected board does not use.
    StrayFeature(&'a str),
}

impl fmt::Display for SelectError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectError::NoBoard => write!(
                f,
                "no board selected; enable exactly one of the board features"
            ),
            SelectError::MultipleBoards(a, b) => write!(
                f,
                "multiple boards selected ({a}, {b}); enable exactly one board feature"
            ),
            SelectError::DuplicateBoard(board) => {
                write!(f, "board `{board}` has more than one binding")
            }
            SelectError::StrayFeature(feature) => write!(
                f,
                "feature `{feature}` does not belong to the selected board"
            ),
        }
    }
}

/// Check that no two rows claim the same board.
pub fn validate(table: &'static [BoardEntry]) -> Result<(), SelectError<'static>> {
    for (i, entry) in table.iter().enumerate() {
        if table[i + 1..].iter().any(|other| other.board == entry.board) {
            return Err(SelectError::DuplicateBoard(entry.board));
        }
    }
    Ok(())
}

/// Pick the single board row selected by `features`.
///
/// Chip and architecture features are implied by the board feature; any
/// other chip or architecture feature in the set is rejected so that two
/// chips' bindings can never be compiled together.
pub fn resolve<'a>(
    table: &'static [BoardEntry],
    features: &[&'a str],
) -> Result<&'static BoardEntry, SelectError<'a>> {
    validate(table)?;

    let mut selected: Option<&'static BoardEntry> = None;
    for entry in table {
        if !features.contains(&entry.board) {
            continue;
        }
        if let Some(first) = selected {
            return Err(SelectError::MultipleBoards(first.board, entry.board));
        }
        selected = Some(entry);
    }
    let entry = selected.ok_or(SelectError::NoBoard)?;

    for &feature in features {
        let is_chip = table.iter().any(|e| e.chip == feature);
        let is_arch = table.iter().any(|e| e.arch.feature() == feature);

        if (is_chip && feature != entry.chip) || (is_arch && feature != entry.arch.feature()) {
            return Err(SelectError::StrayFeature(feature));
        }
    }

    Ok(entry)
}
