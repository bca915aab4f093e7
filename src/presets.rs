use crate::vowel::{Formant, FormantTable};

/// A few steady vowels with average adult male formants.
///
/// F1 to F3 follow Peterson & Barney (1952); F4 and the bandwidths are typical
/// cascade-synthesizer values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Vowel {
    /// /ɑ/ as in "father"
    A,
    /// /ɛ/ as in "bed"
    E,
    /// /i/ as in "heed"
    I,
    /// /ɔ/ as in "bought"
    O,
    /// /u/ as in "who'd"
    U,
}

impl Vowel {
    pub const ALL: [Vowel; 5] = [Vowel::A, Vowel::E, Vowel::I, Vowel::O, Vowel::U];

    #[must_use]
    pub const fn formants(self) -> FormantTable {
        let [f1, f2, f3, f4] = match self {
            Vowel::A => [(730.0, 90.0), (1090.0, 110.0), (2440.0, 170.0), (3400.0, 250.0)],
            Vowel::E => [(530.0, 60.0), (1840.0, 90.0), (2480.0, 150.0), (3500.0, 200.0)],
            Vowel::I => [(270.0, 60.0), (2290.0, 90.0), (3010.0, 150.0), (3700.0, 200.0)],
            Vowel::O => [(570.0, 80.0), (840.0, 90.0), (2410.0, 150.0), (3400.0, 250.0)],
            Vowel::U => [(300.0, 60.0), (870.0, 90.0), (2240.0, 150.0), (3400.0, 200.0)],
        };
        FormantTable::new([
            Formant::new(f1.0, f1.1),
            Formant::new(f2.0, f2.1),
            Formant::new(f3.0, f3.1),
            Formant::new(f4.0, f4.1),
        ])
    }
}
