//! Core value types for the village economy.
//!
//! Each value family (resources, production sectors, click yields) is a
//! small enum indexing a fixed array, so the compiler checks exhaustiveness
//! over all seven production sectors and the save codec can rely on a
//! stable field order.

/// The seven stockpiled resources, in save-file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// Gathered by clicking, consumed by fiber production.
    Wood,
    /// Gathered by clicking, consumed by iron production.
    Stone,
    /// Refined from stone, consumed by steel production.
    Iron,
    /// Refined from wood, consumed by steel production.
    Fiber,
    /// Earned from won battles.
    Kills,
    /// Gathered in the battle scene, spent on units.
    Elements,
    /// Refined from iron + fiber.
    Steel,
}

impl Resource {
    /// Number of resource kinds.
    pub const COUNT: usize = 7;

    /// All resources in save-file order.
    pub const ALL: [Resource; Resource::COUNT] = [
        Resource::Wood,
        Resource::Stone,
        Resource::Iron,
        Resource::Fiber,
        Resource::Kills,
        Resource::Elements,
        Resource::Steel,
    ];

    /// Stable lowercase name, as used in save-file documentation and display.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Resource::Wood => "wood",
            Resource::Stone => "stone",
            Resource::Iron => "iron",
            Resource::Fiber => "fiber",
            Resource::Kills => "kills",
            Resource::Elements => "elements",
            Resource::Steel => "steel",
        }
    }
}

/// The seven production sectors.
///
/// Declaration order is load-bearing: the economic step applies sectors in
/// this order, so fiber consumes wood produced in the same step, iron
/// consumes same-step stone, and steel runs last of the refiners and sees
/// same-step fiber and iron. The save codec writes production pairs in this
/// order as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sector {
    /// Grows food directly; unconstrained by inputs.
    Food,
    /// Produces wood unconditionally.
    Wood,
    /// Produces stone unconditionally.
    Stone,
    /// Converts wood into fiber.
    Fiber,
    /// Converts stone into iron.
    Iron,
    /// Converts iron + fiber into steel.
    Steel,
    /// Produces elements unconditionally.
    Elements,
}

impl Sector {
    /// Number of production sectors.
    pub const COUNT: usize = 7;

    /// All sectors in application/save order.
    pub const ALL: [Sector; Sector::COUNT] = [
        Sector::Food,
        Sector::Wood,
        Sector::Stone,
        Sector::Fiber,
        Sector::Iron,
        Sector::Steel,
        Sector::Elements,
    ];

    /// Stable lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Sector::Food => "food",
            Sector::Wood => "wood",
            Sector::Stone => "stone",
            Sector::Fiber => "fiber",
            Sector::Iron => "iron",
            Sector::Steel => "steel",
            Sector::Elements => "elements",
        }
    }
}

/// The six click-gatherable yields, in save-file order.
///
/// Wood, stone, and food are gathered directly in the build scene; fiber and
/// iron are produced by work actions that consume wood/stone; elements are
/// gathered in the battle scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClickKind {
    /// Direct gather.
    Wood,
    /// Direct gather.
    Stone,
    /// Work action: consumes wood.
    Fiber,
    /// Work action: consumes stone.
    Iron,
    /// Direct gather (battle scene).
    Elements,
    /// Direct gather; adds to the food stock rather than a resource.
    Food,
}

impl ClickKind {
    /// Number of click yields.
    pub const COUNT: usize = 6;

    /// All click kinds in save-file order.
    pub const ALL: [ClickKind; ClickKind::COUNT] = [
        ClickKind::Wood,
        ClickKind::Stone,
        ClickKind::Fiber,
        ClickKind::Iron,
        ClickKind::Elements,
        ClickKind::Food,
    ];

    /// Stable lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ClickKind::Wood => "wood",
            ClickKind::Stone => "stone",
            ClickKind::Fiber => "fiber",
            ClickKind::Iron => "iron",
            ClickKind::Elements => "elements",
            ClickKind::Food => "food",
        }
    }
}

/// One production line: an upgrade multiplier and a building count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductionLine {
    /// Output multiplier; starts at 1 and only ever doubles.
    pub multiplier: u64,
    /// Number of buildings purchased for this sector.
    pub buildings: u64,
}

impl Default for ProductionLine {
    fn default() -> Self {
        Self {
            multiplier: 1,
            buildings: 0,
        }
    }
}

impl ProductionLine {
    /// Effective output before labor efficiency and ascension scaling.
    #[must_use]
    pub const fn effective(self) -> u64 {
        self.multiplier.saturating_mul(self.buildings)
    }
}

/// Monotone counters kept for the stats display.
///
/// Nothing in the simulation reads these back; they only ever increase
/// (resource spending deliberately does not decrement `gathered`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    /// Total of each resource ever added, indexed by [`Resource`].
    pub(crate) gathered: [u64; Resource::COUNT],
    /// Total food ever credited by manual gathering.
    pub(crate) food_gathered: u64,
    /// Manual action counters, indexed by [`ClickKind`].
    pub(crate) clicked: [u64; ClickKind::COUNT],
    /// Buildings purchased per sector, indexed by [`Sector`].
    pub(crate) built: [u64; Sector::COUNT],
}

impl Stats {
    /// Total of `resource` ever added to the stockpile.
    #[must_use]
    pub const fn gathered(&self, resource: Resource) -> u64 {
        self.gathered[resource as usize]
    }

    /// Total food ever credited by manual gathering.
    #[must_use]
    pub const fn food_gathered(&self) -> u64 {
        self.food_gathered
    }

    /// Manual action counter for `kind`.
    #[must_use]
    pub const fn clicked(&self, kind: ClickKind) -> u64 {
        self.clicked[kind as usize]
    }

    /// Buildings purchased in `sector`.
    #[must_use]
    pub const fn built(&self, sector: Sector) -> u64 {
        self.built[sector as usize]
    }
}
