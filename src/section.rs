//! Section assignment: every joined result lands in exactly one of six
//! fixed sections, chosen by tag precedence.

use crate::catalog::Catalog;
use crate::diagnostics::ReportError;
use crate::model::{JoinedResult, ResultRecord, TestRecord};

/// The six report sections, declared in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Cpu,
    Ppu,
    Apu,
    Mapper,
    Input,
    Misc,
}

const SECTION_COUNT: usize = 6;

/// Fixed render order. Deliberately not the same order as
/// [`TAG_PRECEDENCE`]; the two orderings are independent.
pub const RENDER_ORDER: [SectionId; SECTION_COUNT] = [
    SectionId::Cpu,
    SectionId::Ppu,
    SectionId::Apu,
    SectionId::Mapper,
    SectionId::Input,
    SectionId::Misc,
];

/// Categorization order: the first of these tags found in a test's tag set
/// decides its section. Pure list position, no semantic priority.
pub const TAG_PRECEDENCE: [(&str, SectionId); 5] = [
    ("apu", SectionId::Apu),
    ("input", SectionId::Input),
    ("mapper", SectionId::Mapper),
    ("ppu", SectionId::Ppu),
    ("cpu", SectionId::Cpu),
];

impl SectionId {
    /// The heading text used in the rendered report.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Cpu => "CPU Tests",
            Self::Ppu => "PPU Tests",
            Self::Apu => "APU Tests",
            Self::Mapper => "Mapper Tests",
            Self::Input => "Input Tests",
            Self::Misc => "Misc Tests",
        }
    }
}

/// Picks the section for a test: the first precedence tag present in its
/// tag set wins, otherwise `Misc`.
pub fn categorize(test: &TestRecord) -> SectionId {
    for (tag, id) in TAG_PRECEDENCE {
        if test.tags.contains(tag) {
            return id;
        }
    }
    SectionId::Misc
}

/// All joined results bucketed by section, insertion order preserved.
pub struct Report<'a> {
    buckets: [Vec<JoinedResult<'a>>; SECTION_COUNT],
}

impl<'a> Report<'a> {
    /// Joins every result against the catalog and buckets it. The first
    /// join failure aborts the build; no partial report escapes.
    pub fn build(
        catalog: &Catalog<'a>,
        results: &'a [ResultRecord],
    ) -> Result<Self, ReportError> {
        let mut buckets: [Vec<JoinedResult<'a>>; SECTION_COUNT] = Default::default();
        for result in results {
            let joined = catalog.join(result)?;
            buckets[categorize(joined.test) as usize].push(joined);
        }
        Ok(Self { buckets })
    }

    /// Sections in render order, each paired with its results.
    pub fn sections(&self) -> impl Iterator<Item = (SectionId, &[JoinedResult<'a>])> + '_ {
        RENDER_ORDER
            .iter()
            .map(move |&id| (id, self.buckets[id as usize].as_slice()))
    }
}
