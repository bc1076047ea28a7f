use crate::ship::VesselKind;

/// Rows and columns on the board; both axes are 1-indexed.
pub const BOARD_SIZE: i32 = 10;
pub const DEFAULT_SONAR_CHARGES: u32 = 2;
pub const NUM_KINDS: usize = 3;
pub const VESSEL_KINDS: [VesselKind; NUM_KINDS] = [
    VesselKind::Minesweeper,
    VesselKind::Destroyer,
    VesselKind::Battleship,
];

/// Look up a vessel kind by its name, ignoring ASCII case.
pub fn kind_by_name(name: &str) -> Option<VesselKind> {
    VESSEL_KINDS
        .iter()
        .copied()
        .find(|kind| kind.name().eq_ignore_ascii_case(name))
}
