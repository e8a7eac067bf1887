//! Kern van de binomiale kubus: de ontbinding van (a+b)³ in acht dozen.
//!
//! Dit is de enige module met rekenlogica. Alles hier is puur en
//! toestandloos: dezelfde parameters leveren altijd dezelfde layout op,
//! en een herberekening vervangt het vorige resultaat volledig.

use serde::Serialize;

pub mod equation;

pub use equation::EquationBreakdown;

/// Fouten die het kernmodel kan opleveren.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecompositionError {
    /// Een parameter valt buiten het domein van positieve gehele getallen.
    #[error("parameter `{name}` moet een positief geheel getal zijn (kreeg {value})")]
    InvalidParameter { name: &'static str, value: i64 },
}

/// Gevalideerde parameters (a, b). Beide zijn strikt positief; dit is de
/// volledige veranderlijke toestand waarvan alle afgeleide data afhangt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameters {
    a: u32,
    b: u32,
}

impl Parameters {
    /// Valideer twee kandidaatwaarden tot parameters.
    pub fn new(a: i64, b: i64) -> Result<Self, DecompositionError> {
        Ok(Self {
            a: positive(a, "a")?,
            b: positive(b, "b")?,
        })
    }

    #[must_use]
    pub const fn a(&self) -> u32 {
        self.a
    }

    #[must_use]
    pub const fn b(&self) -> u32 {
        self.b
    }

    /// Ribbe van de samengestelde kubus: a + b.
    #[must_use]
    pub const fn edge(&self) -> u32 {
        self.a + self.b
    }
}

impl Default for Parameters {
    /// Startwaarden van de visualisatie: a = 5, b = 1.
    fn default() -> Self {
        Self { a: 5, b: 1 }
    }
}

fn positive(value: i64, name: &'static str) -> Result<u32, DecompositionError> {
    if value <= 0 {
        return Err(DecompositionError::InvalidParameter { name, value });
    }
    u32::try_from(value).map_err(|_| DecompositionError::InvalidParameter { name, value })
}

/// Strook die een doos op één as inneemt: `A` is het lage stuk [0, a],
/// `B` het hoge stuk [a, a+b]. De strookkeuze bepaalt op die as zowel de
/// afmeting (a of b) als het centrum (a/2 of a + b/2), waardoor de acht
/// dozen elkaar per constructie raken zonder gaten of overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Slab {
    A,
    B,
}

impl Slab {
    /// Afmeting van de doos langs deze as.
    #[must_use]
    pub const fn extent(self, params: Parameters) -> u32 {
        match self {
            Self::A => params.a,
            Self::B => params.b,
        }
    }

    /// Laagste coördinaat van de strook.
    #[must_use]
    pub const fn min(self, params: Parameters) -> u32 {
        match self {
            Self::A => 0,
            Self::B => params.a,
        }
    }

    /// Centrum van de strook: de laagste coördinaat plus de halve afmeting.
    #[must_use]
    pub fn center(self, params: Parameters) -> f64 {
        f64::from(self.min(params)) + f64::from(self.extent(params)) / 2.0
    }
}

/// De vaste ontbindingstabel: per rij de strookkeuze voor de x-, y- en
/// z-as. De rijvolgorde is onderdeel van het contract: rij-index is
/// tegelijk de stabiele kleurindex waarmee de host zijn acht permanente
/// objecten bijwerkt.
pub const LAYOUT_TABLE: [[Slab; 3]; 8] = [
    [Slab::A, Slab::A, Slab::A],
    [Slab::B, Slab::B, Slab::B],
    [Slab::A, Slab::A, Slab::B],
    [Slab::A, Slab::B, Slab::A],
    [Slab::B, Slab::A, Slab::A],
    [Slab::A, Slab::B, Slab::B],
    [Slab::B, Slab::A, Slab::B],
    [Slab::B, Slab::B, Slab::A],
];

/// Algebraïsche term van de ontbinding waartoe een doos behoort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Term {
    ACubed,
    BCubed,
    ASquaredB,
    ABSquared,
}

impl Term {
    /// Bepaal de term uit een tabelrij: het aantal `B`-stroken telt de
    /// factoren b in het volume van de doos.
    #[must_use]
    pub fn for_slabs(slabs: [Slab; 3]) -> Self {
        match slabs.iter().filter(|slab| matches!(slab, Slab::B)).count() {
            0 => Self::ACubed,
            1 => Self::ASquaredB,
            2 => Self::ABSquared,
            _ => Self::BCubed,
        }
    }

    /// Weergavenaam met unicode-superscripts.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ACubed => "a³",
            Self::BCubed => "b³",
            Self::ASquaredB => "3a²b",
            Self::ABSquared => "3ab²",
        }
    }
}

/// Eén van de acht dozen van de ontbinding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoxSpec {
    /// Stabiele rij-index (0–7); identificeert term en materiaal.
    pub color_index: usize,
    /// Term waartoe het doosvolume bijdraagt.
    pub term: Term,
    /// Afmetingen (breedte, hoogte, diepte); elke afmeting is a of b.
    pub dimensions: [u32; 3],
    /// Centrum van de doos in scènecoördinaten.
    pub center: [f64; 3],
}

impl BoxSpec {
    fn for_row(color_index: usize, params: Parameters) -> Self {
        let slabs = LAYOUT_TABLE[color_index];
        Self {
            color_index,
            term: Term::for_slabs(slabs),
            dimensions: slabs.map(|slab| slab.extent(params)),
            center: slabs.map(|slab| slab.center(params)),
        }
    }

    /// Exact doosvolume.
    #[must_use]
    pub fn volume(&self) -> u64 {
        self.dimensions
            .iter()
            .map(|&extent| u64::from(extent))
            .product()
    }
}

/// Volledig herberekend resultaat: de acht dozen plus de termwaarden.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub boxes: [BoxSpec; 8],
    pub equation: EquationBreakdown,
}

impl Layout {
    /// Bereken de layout voor gevalideerde parameters. Puur en O(1):
    /// acht tabelrijen plus de gehele-getallenrekening van de termen.
    #[must_use]
    pub fn compute(params: Parameters) -> Self {
        Self {
            boxes: core::array::from_fn(|index| BoxSpec::for_row(index, params)),
            equation: EquationBreakdown::new(params),
        }
    }
}

/// Gemaksingang: valideer (a, b) en bereken de layout in één stap.
pub fn compute_layout(a: i64, b: i64) -> Result<Layout, DecompositionError> {
    Ok(Layout::compute(Parameters::new(a, b)?))
}
