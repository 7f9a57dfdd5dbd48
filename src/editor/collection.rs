//! Named, ordered set of levels with a current-level cursor

use log::debug;

use crate::io::error::{EditorError, Result};
use crate::spatial::grid::LevelGrid;

/// Levels keyed by unique name, in insertion order
///
/// The current level is the one operated on when no name is given. It always
/// names a level present in the collection, or is unset when the collection is
/// empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LevelCollection {
    levels: Vec<(String, LevelGrid)>,
    current: Option<usize>,
}

impl LevelCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from named levels; the first becomes current
    ///
    /// # Errors
    ///
    /// Returns `DuplicateLevel` if two levels share a name
    pub fn from_levels<I, S>(levels: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, LevelGrid)>,
        S: Into<String>,
    {
        let mut collection = Self::new();
        for (name, grid) in levels {
            collection.add_level(name, grid, false)?;
        }
        Ok(collection)
    }

    /// Number of levels
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Test whether the collection holds no levels
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Test whether a level with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Name of the current level
    pub fn current_level(&self) -> Option<&str> {
        self.current
            .and_then(|index| self.levels.get(index))
            .map(|(name, _)| name.as_str())
    }

    /// Move the cursor to another level
    ///
    /// # Errors
    ///
    /// Returns `UnknownLevel` if no level has this name
    pub fn set_current_level(&mut self, name: &str) -> Result<()> {
        let index = self.position(name).ok_or_else(|| unknown(name))?;
        self.current = Some(index);
        debug!("current level set to '{name}'");
        Ok(())
    }

    /// Level by name, or the current level when `name` is `None`
    ///
    /// # Errors
    ///
    /// Returns `UnknownLevel` for a missing name, or `EmptyCollection` when no
    /// name is given and there is no current level
    pub fn level(&self, name: Option<&str>) -> Result<&LevelGrid> {
        let index = self.resolve(name)?;
        self.levels
            .get(index)
            .map(|(_, grid)| grid)
            .ok_or_else(|| unknown(name.unwrap_or_default()))
    }

    /// Mutable level by name, or the current level when `name` is `None`
    ///
    /// # Errors
    ///
    /// Returns `UnknownLevel` for a missing name, or `EmptyCollection` when no
    /// name is given and there is no current level
    pub fn level_mut(&mut self, name: Option<&str>) -> Result<&mut LevelGrid> {
        let index = self.resolve(name)?;
        self.levels
            .get_mut(index)
            .map(|(_, grid)| grid)
            .ok_or_else(|| unknown(name.unwrap_or_default()))
    }

    /// Level names in insertion order
    pub fn level_names(&self) -> Vec<&str> {
        self.levels.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Iterate over `(name, level)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LevelGrid)> {
        self.levels.iter().map(|(name, grid)| (name.as_str(), grid))
    }

    /// Insert a level, or replace an existing one when `overwrite` is set
    ///
    /// A replaced level keeps its position. The first level added to an empty
    /// collection becomes current.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateLevel` if the name exists and `overwrite` is false
    pub fn add_level(
        &mut self,
        name: impl Into<String>,
        grid: LevelGrid,
        overwrite: bool,
    ) -> Result<()> {
        let name = name.into();
        match self.position(&name) {
            Some(_) if !overwrite => Err(EditorError::DuplicateLevel { name }),
            Some(index) => {
                if let Some(slot) = self.levels.get_mut(index) {
                    slot.1 = grid;
                }
                debug!("level '{name}' overwritten");
                Ok(())
            }
            None => {
                debug!(
                    "level '{name}' added ({}x{})",
                    grid.width(),
                    grid.height()
                );
                self.levels.push((name, grid));
                if self.current.is_none() {
                    self.current = Some(0);
                }
                Ok(())
            }
        }
    }

    /// Remove a level and return it
    ///
    /// If the removed level was current, the first remaining level becomes
    /// current.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLevel` if no level has this name
    pub fn remove_level(&mut self, name: &str) -> Result<LevelGrid> {
        let index = self.position(name).ok_or_else(|| unknown(name))?;
        let (_, grid) = self.levels.remove(index);

        self.current = match self.current {
            _ if self.levels.is_empty() => None,
            Some(current) if current == index => Some(0),
            Some(current) if current > index => Some(current - 1),
            other => other,
        };
        debug!("level '{name}' removed");
        Ok(grid)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.levels
            .iter()
            .position(|(level_name, _)| level_name == name)
    }

    fn resolve(&self, name: Option<&str>) -> Result<usize> {
        match name {
            Some(name) => self.position(name).ok_or_else(|| unknown(name)),
            None => self.current.ok_or(EditorError::EmptyCollection {
                operation: "resolve the current level",
            }),
        }
    }
}

fn unknown(name: &str) -> EditorError {
    EditorError::UnknownLevel {
        name: name.to_string(),
    }
}
