use serde::{
    Deserialize,
    Serialize,
};
use serde_string_enum::{
    DeserializeLabeledStringEnum,
    SerializeLabeledStringEnum,
};

/// A boostable stat.
///
/// Similar to [`Stat`][`crate::Stat`], but excludes HP and includes accuracy and evasion.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum Boost {
    #[string = "atk"]
    #[alias = "Attack"]
    Atk,
    #[string = "def"]
    #[alias = "Defense"]
    Def,
    #[string = "spa"]
    #[alias = "spatk"]
    #[alias = "Special Attack"]
    SpAtk,
    #[string = "spd"]
    #[alias = "spdef"]
    #[alias = "Special Defense"]
    SpDef,
    #[string = "spe"]
    #[alias = "Speed"]
    Spe,
    #[string = "acc"]
    #[alias = "Accuracy"]
    Accuracy,
    #[string = "eva"]
    #[alias = "Evasion"]
    Evasion,
}

fn next_boost_for_iterator(boost: Boost) -> Option<Boost> {
    match boost {
        Boost::Atk => Some(Boost::Def),
        Boost::Def => Some(Boost::SpAtk),
        Boost::SpAtk => Some(Boost::SpDef),
        Boost::SpDef => Some(Boost::Spe),
        Boost::Spe => Some(Boost::Accuracy),
        Boost::Accuracy => Some(Boost::Evasion),
        Boost::Evasion => None,
    }
}

/// Iterator over the entries of a [`BoostTable`].
pub struct BoostTableEntries<'b> {
    table: &'b BoostTable,
    next_boost: Option<Boost>,
}

impl<'b> BoostTableEntries<'b> {
    fn new(table: &'b BoostTable) -> Self {
        Self {
            table,
            next_boost: Some(Boost::Atk),
        }
    }
}

impl<'b> Iterator for BoostTableEntries<'b> {
    type Item = (Boost, i8);

    fn next(&mut self) -> Option<Self::Item> {
        let boost = self.next_boost?;
        let value = self.table.get(boost);
        self.next_boost = next_boost_for_iterator(boost);
        Some((boost, value))
    }
}

/// A table of boost stages, one per boostable stat.
///
/// Each stage is in the range `[-6, 6]` on a Mon. Tables attached to effects describe deltas, so
/// values outside that range are permitted here.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoostTable {
    #[serde(default)]
    pub atk: i8,
    #[serde(default)]
    pub def: i8,
    #[serde(default)]
    pub spa: i8,
    #[serde(default)]
    pub spd: i8,
    #[serde(default)]
    pub spe: i8,
    #[serde(default)]
    pub acc: i8,
    #[serde(default)]
    pub eva: i8,
}

impl BoostTable {
    /// Returns the value for the given boost.
    pub fn get(&self, boost: Boost) -> i8 {
        match boost {
            Boost::Atk => self.atk,
            Boost::Def => self.def,
            Boost::SpAtk => self.spa,
            Boost::SpDef => self.spd,
            Boost::Spe => self.spe,
            Boost::Accuracy => self.acc,
            Boost::Evasion => self.eva,
        }
    }

    /// Sets the given value in the boost table.
    pub fn set(&mut self, boost: Boost, value: i8) {
        let boost = match boost {
            Boost::Atk => &mut self.atk,
            Boost::Def => &mut self.def,
            Boost::SpAtk => &mut self.spa,
            Boost::SpDef => &mut self.spd,
            Boost::Spe => &mut self.spe,
            Boost::Accuracy => &mut self.acc,
            Boost::Evasion => &mut self.eva,
        };
        *boost = value;
    }

    /// Creates an iterator over all boost entries, in a fixed order.
    pub fn entries<'b>(&'b self) -> BoostTableEntries<'b> {
        BoostTableEntries::new(self)
    }

    /// Creates an iterator over all non-zero boost entries, in a fixed order.
    pub fn non_zero_entries<'b>(&'b self) -> impl Iterator<Item = (Boost, i8)> + 'b {
        self.entries().filter(|(_, value)| *value != 0)
    }

    /// Sums up all positive stages in the table.
    pub fn positive_stages(&self) -> u32 {
        self.entries()
            .map(|(_, value)| if value > 0 { value as u32 } else { 0 })
            .sum()
    }
}

impl FromIterator<(Boost, i8)> for BoostTable {
    fn from_iter<T: IntoIterator<Item = (Boost, i8)>>(iter: T) -> Self {
        let mut out = BoostTable::default();
        for (boost, value) in iter {
            out.set(boost, value);
        }
        out
    }
}
