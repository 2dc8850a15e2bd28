use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the two hemoglobin alleles modeled at the locus.
///
/// `A` is the normal hemoglobin allele; `S` is the sickle variant that
/// confers malaria resistance in heterozygotes and sickle-cell disease in
/// homozygotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Allele {
    /// Normal hemoglobin (HbA).
    A,
    /// Sickle hemoglobin (HbS).
    S,
}

impl Allele {
    /// The other allele at the locus.
    pub fn other(self) -> Self {
        match self {
            Allele::A => Allele::S,
            Allele::S => Allele::A,
        }
    }
}

impl fmt::Display for Allele {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Allele::A => write!(f, "A"),
            Allele::S => write!(f, "S"),
        }
    }
}

/// A diploid genotype at the hemoglobin locus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genotype {
    /// Homozygous normal (HbAA).
    AA,
    /// Heterozygous carrier (HbAS), malaria-resistant.
    AS,
    /// Homozygous sickle (HbSS), sickle-cell disease.
    SS,
}

impl Genotype {
    /// All three genotypes, in the conventional AA/AS/SS order.
    pub const ALL: [Genotype; 3] = [Genotype::AA, Genotype::AS, Genotype::SS];

    /// The two alleles this genotype carries.
    pub fn alleles(self) -> (Allele, Allele) {
        match self {
            Genotype::AA => (Allele::A, Allele::A),
            Genotype::AS => (Allele::A, Allele::S),
            Genotype::SS => (Allele::S, Allele::S),
        }
    }

    /// Number of copies of `allele` this genotype carries (0, 1, or 2).
    pub fn dose(self, allele: Allele) -> u8 {
        let (a1, a2) = self.alleles();
        u8::from(a1 == allele) + u8::from(a2 == allele)
    }

    /// Whether this genotype carries one copy of each allele.
    pub fn is_heterozygous(self) -> bool {
        matches!(self, Genotype::AS)
    }
}

impl fmt::Display for Genotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Genotype::AA => write!(f, "AA"),
            Genotype::AS => write!(f, "AS"),
            Genotype::SS => write!(f, "SS"),
        }
    }
}
