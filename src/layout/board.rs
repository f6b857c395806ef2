//! Plate and socket group collection
//!
//! The board owns the committed state. Every position it stores has passed
//! validation against the groups that were committed at the time; rejected
//! edits leave it untouched.

use std::collections::HashSet;

use tracing::{debug, info, warn};

use super::config::LayoutConfig;
use super::error::BoardError;
use super::types::{Direction, GroupId, Plate, PlateId, Point, SocketGroup};
use super::validator::{validate_position, Validation};

/// The plates of one installation and the socket groups mounted on them
#[derive(Debug, Clone)]
pub struct Board {
    config: LayoutConfig,
    plates: Vec<Plate>,
    groups: Vec<SocketGroup>,
    next_plate: u32,
    next_group: u32,
}

impl Board {
    /// Create a board holding a single plate
    pub fn new(config: LayoutConfig, width: f64, height: f64) -> Self {
        let plate = Plate::new(PlateId(1), width, height, &config);
        Self {
            config,
            plates: vec![plate],
            groups: vec![],
            next_plate: 2,
            next_group: 1,
        }
    }

    /// Rebuild a board from stored plates and groups
    ///
    /// Plate dimensions are clamped; group positions are taken as-is (use
    /// [`lint::check`](super::lint::check) to audit them). Ids must be unique
    /// and leave room for the next id of each kind.
    pub fn from_parts(
        config: LayoutConfig,
        plates: Vec<Plate>,
        groups: Vec<SocketGroup>,
    ) -> Result<Self, BoardError> {
        if plates.is_empty() {
            return Err(BoardError::NoPlates);
        }
        let mut seen = HashSet::new();
        if let Some(p) = plates.iter().find(|p| !seen.insert(p.id)) {
            return Err(BoardError::DuplicatePlate(p.id));
        }
        let mut seen = HashSet::new();
        if let Some(g) = groups.iter().find(|g| !seen.insert(g.id)) {
            return Err(BoardError::DuplicateGroup(g.id));
        }

        let plates: Vec<Plate> = plates
            .into_iter()
            .map(|p| Plate::new(p.id, p.width, p.height, &config))
            .collect();
        let next_plate = plates
            .iter()
            .map(|p| p.id.0)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or(BoardError::IdsExhausted("plate"))?;
        let next_group = groups
            .iter()
            .map(|g| g.id.0)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or(BoardError::IdsExhausted("socket group"))?;
        Ok(Self {
            config,
            plates,
            groups,
            next_plate,
            next_group,
        })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Plates in display order
    pub fn plates(&self) -> &[Plate] {
        &self.plates
    }

    /// Every committed socket group, across all plates
    pub fn groups(&self) -> &[SocketGroup] {
        &self.groups
    }

    /// Look up a plate by id
    pub fn plate(&self, id: PlateId) -> Option<&Plate> {
        self.plates.iter().find(|p| p.id == id)
    }

    /// Look up a socket group by id
    pub fn group(&self, id: GroupId) -> Option<&SocketGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// Groups mounted on the given plate
    pub fn groups_on(&self, plate: PlateId) -> impl Iterator<Item = &SocketGroup> {
        self.groups.iter().filter(move |g| g.plate_id == plate)
    }

    /// Append a plate with clamped dimensions to the end of the row
    pub fn add_plate(&mut self, width: f64, height: f64) -> Result<PlateId, BoardError> {
        let id = PlateId(self.next_plate);
        self.next_plate = self
            .next_plate
            .checked_add(1)
            .ok_or(BoardError::IdsExhausted("plate"))?;
        let plate = Plate::new(id, width, height, &self.config);
        info!(plate = %id, width = plate.width, height = plate.height, "added plate");
        self.plates.push(plate);
        Ok(id)
    }

    /// Remove a plate and the groups mounted on it
    ///
    /// Returns the removed groups. The last remaining plate cannot be removed.
    pub fn remove_plate(&mut self, id: PlateId) -> Result<Vec<SocketGroup>, BoardError> {
        let index = self.plate_index(id)?;
        if self.plates.len() == 1 {
            return Err(BoardError::LastPlate(id));
        }
        self.plates.remove(index);
        let removed = self.take_groups_on(id);
        info!(plate = %id, groups = removed.len(), "removed plate");
        Ok(removed)
    }

    /// Resize a plate, clamping the new dimensions
    ///
    /// When the plate becomes too small for sockets its groups are removed
    /// and returned.
    pub fn resize_plate(
        &mut self,
        id: PlateId,
        width: f64,
        height: f64,
    ) -> Result<Vec<SocketGroup>, BoardError> {
        let index = self.plate_index(id)?;
        let plate = &mut self.plates[index];
        plate.resize(width, height, &self.config);
        info!(plate = %id, width = plate.width, height = plate.height, "resized plate");

        if plate.can_host_sockets(&self.config) {
            return Ok(vec![]);
        }
        let removed = self.take_groups_on(id);
        if !removed.is_empty() {
            warn!(
                plate = %id,
                groups = removed.len(),
                "plate too small for sockets, removed its groups"
            );
        }
        Ok(removed)
    }

    /// Validate and commit a new socket group
    pub fn add_group(
        &mut self,
        plate_id: PlateId,
        count: u8,
        direction: Direction,
        position: Point,
    ) -> Result<GroupId, BoardError> {
        let (min, max) = self.config.socket_count_range;
        if !(min..=max).contains(&count) {
            return Err(BoardError::InvalidCount { count, min, max });
        }
        let plate = self.plate(plate_id).ok_or(BoardError::UnknownPlate(plate_id))?;
        if !plate.can_host_sockets(&self.config) {
            return Err(BoardError::PlateTooSmall {
                plate: plate_id,
                width: plate.width,
                height: plate.height,
            });
        }

        let group = SocketGroup {
            id: GroupId(self.next_group),
            plate_id,
            count,
            direction,
            position_x: position.x,
            position_y: position.y,
        };
        validate_position(position, &group, plate, &self.groups, &self.config).into_result()?;

        self.next_group = self
            .next_group
            .checked_add(1)
            .ok_or(BoardError::IdsExhausted("socket group"))?;
        info!(group = %group.id, plate = %plate_id, count, %direction, "added socket group");
        let id = group.id;
        self.groups.push(group);
        Ok(id)
    }

    /// Validate moving a stored group without committing anything
    pub fn validate_move(&self, id: GroupId, position: Point) -> Result<Validation, BoardError> {
        let group = self.group(id).ok_or(BoardError::UnknownGroup(id))?;
        let plate = self
            .plate(group.plate_id)
            .ok_or(BoardError::UnknownPlate(group.plate_id))?;
        Ok(validate_position(
            position,
            group,
            plate,
            &self.groups,
            &self.config,
        ))
    }

    /// Move a group, committing the position only if it validates
    pub fn move_group(&mut self, id: GroupId, position: Point) -> Result<Point, BoardError> {
        let position = self.validate_move(id, position)?.into_result()?;
        if let Some(group) = self.groups.iter_mut().find(|g| g.id == id) {
            group.set_position(position);
        }
        debug!(group = %id, x = position.x, y = position.y, "moved socket group");
        Ok(position)
    }

    /// Remove a group, returning it
    pub fn remove_group(&mut self, id: GroupId) -> Result<SocketGroup, BoardError> {
        let index = self
            .groups
            .iter()
            .position(|g| g.id == id)
            .ok_or(BoardError::UnknownGroup(id))?;
        info!(group = %id, "removed socket group");
        Ok(self.groups.remove(index))
    }

    fn plate_index(&self, id: PlateId) -> Result<usize, BoardError> {
        self.plates
            .iter()
            .position(|p| p.id == id)
            .ok_or(BoardError::UnknownPlate(id))
    }

    fn take_groups_on(&mut self, plate: PlateId) -> Vec<SocketGroup> {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.groups)
            .into_iter()
            .partition(|g| g.plate_id == plate);
        self.groups = kept;
        removed
    }
}
