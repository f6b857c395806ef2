//! Lint engine for auditing a stored board.
//!
//! Validation guards each edit as it happens; lint re-checks everything that
//! is already committed. It catches groups left out of bounds by a plate
//! resize, groups loaded from an external source, and groups whose plate has
//! gone missing.

use std::fmt;

use super::board::Board;
use super::config::LayoutConfig;
use super::geometry::rect_distance;
use super::types::{GroupId, SocketGroup};
use super::validator::bounds_of;

/// A lint warning about a stored group
#[derive(Debug, Clone, PartialEq)]
pub struct LintWarning {
    pub category: LintCategory,
    pub group: GroupId,
    pub message: String,
}

/// Category of lint defect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintCategory {
    Eligibility,
    Containment,
    Clearance,
    Orphan,
}

impl fmt::Display for LintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintCategory::Eligibility => write!(f, "eligibility"),
            LintCategory::Containment => write!(f, "containment"),
            LintCategory::Clearance => write!(f, "clearance"),
            LintCategory::Orphan => write!(f, "orphan"),
        }
    }
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.message)
    }
}

/// Run all lint checks on a board.
pub fn check(board: &Board) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    check_plates(board, &mut warnings);
    check_clearance(board.groups(), board.config(), &mut warnings);
    warnings
}

// ── Plate membership, eligibility and containment ─────────────────

fn check_plates(board: &Board, warnings: &mut Vec<LintWarning>) {
    let config = board.config();
    for group in board.groups() {
        let Some(plate) = board.plate(group.plate_id) else {
            warnings.push(LintWarning {
                category: LintCategory::Orphan,
                group: group.id,
                message: format!(
                    "group {} references missing plate {}",
                    group.id, group.plate_id
                ),
            });
            continue;
        };

        if !plate.can_host_sockets(config) {
            warnings.push(LintWarning {
                category: LintCategory::Eligibility,
                group: group.id,
                message: format!(
                    "group {} sits on plate {} ({}x{} cm), below the {}x{} cm socket minimum",
                    group.id,
                    plate.id,
                    plate.width,
                    plate.height,
                    config.min_socket_plate.0,
                    config.min_socket_plate.1
                ),
            });
        }

        let b = bounds_of(group, config);
        let margin = config.edge_clearance;
        let edges = [
            ("left", margin - b.left),
            ("bottom", margin - b.bottom),
            ("right", b.right - (plate.width - margin)),
            ("top", b.top - (plate.height - margin)),
        ];
        for (edge, overflow) in edges {
            if overflow > 0.0 {
                warnings.push(LintWarning {
                    category: LintCategory::Containment,
                    group: group.id,
                    message: format!(
                        "group {} extends {:.1} cm into the {} margin of plate {}",
                        group.id, overflow, edge, plate.id
                    ),
                });
            }
        }
    }
}

// ── Inter-group clearance ─────────────────────────────────────────

fn check_clearance(
    groups: &[SocketGroup],
    config: &LayoutConfig,
    warnings: &mut Vec<LintWarning>,
) {
    for (i, a) in groups.iter().enumerate() {
        for b in &groups[i + 1..] {
            if a.plate_id != b.plate_id {
                continue;
            }
            let distance = rect_distance(&bounds_of(a, config), &bounds_of(b, config));
            if distance < config.group_clearance {
                warnings.push(LintWarning {
                    category: LintCategory::Clearance,
                    group: b.id,
                    message: format!(
                        "groups {} and {} on plate {} are {:.1} cm apart (minimum {} cm)",
                        a.id, b.id, a.plate_id, distance, config.group_clearance
                    ),
                });
            }
        }
    }
}
