// src/conversion.rs
//
// Convertisseur d'unités
// ----------------------
// Sous-système entièrement séparé du noyau : tables de facteurs
// multiplicatifs (affines pour la température) autour d'une unité de base
// par catégorie. Conversion en deux temps : vers_base puis depuis_base.
//
// Unités de base : m, kg, °C, m², m/s, s, rad, bit, J, m³.
// Approximations assumées : mois = 30 jours, année = 365 jours.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ErreurConversion {
    #[error("unité inconnue pour {categorie}: '{unite}'")]
    UniteInconnue {
        categorie: &'static str,
        unite: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Categorie {
    Longueur,
    Masse,
    Temperature,
    Aire,
    Vitesse,
    Temps,
    Angle,
    Donnees,
    Energie,
    Volume,
}

impl Categorie {
    pub const TOUTES: [Categorie; 10] = [
        Categorie::Longueur,
        Categorie::Masse,
        Categorie::Temperature,
        Categorie::Aire,
        Categorie::Vitesse,
        Categorie::Temps,
        Categorie::Angle,
        Categorie::Donnees,
        Categorie::Energie,
        Categorie::Volume,
    ];

    pub fn nom(self) -> &'static str {
        match self {
            Categorie::Longueur => "Longueur",
            Categorie::Masse => "Masse",
            Categorie::Temperature => "Température",
            Categorie::Aire => "Aire",
            Categorie::Vitesse => "Vitesse",
            Categorie::Temps => "Temps",
            Categorie::Angle => "Angle",
            Categorie::Donnees => "Données",
            Categorie::Energie => "Énergie",
            Categorie::Volume => "Volume",
        }
    }

    /// Unités de la catégorie ; la première est l'unité de base.
    pub fn unites(self) -> &'static [&'static str] {
        match self {
            Categorie::Longueur => &["m", "km", "cm", "mm", "ft", "in"],
            Categorie::Masse => &["kg", "g", "lb", "oz"],
            Categorie::Temperature => &["C", "F", "K"],
            Categorie::Aire => &["m2", "km2", "cm2", "mm2", "ft2", "in2", "acre", "ha"],
            Categorie::Vitesse => &["mps", "kph", "mph", "knot", "fts"],
            Categorie::Temps => &["s", "min", "h", "day", "week", "month", "year"],
            Categorie::Angle => &["rad", "deg", "grad"],
            Categorie::Donnees => &[
                "bit", "byte", "KB", "KiB", "MB", "MiB", "GB", "GiB", "TB", "TiB", "PB",
                "PiB", "EB", "EiB", "ZB", "ZiB", "YB", "YiB",
            ],
            Categorie::Energie => &[
                "J", "kJ", "eV", "cal", "kcal", "ftlb", "BTU", "Wh", "kWh",
            ],
            Categorie::Volume => &[
                "m3", "L", "mL", "cm3", "mm3", "ft3", "in3", "gal_us", "gal_uk", "qt_us",
                "qt_uk", "pt_us", "pt_uk", "floz_us", "floz_uk", "cup", "tbsp", "tsp",
            ],
        }
    }
}

/// Convertit `valeur` de l'unité `de` vers l'unité `vers` au sein d'une
/// catégorie. Identité si `de == vers`.
pub fn convertir(
    categorie: Categorie,
    valeur: f64,
    de: &str,
    vers: &str,
) -> Result<f64, ErreurConversion> {
    if de == vers {
        return Ok(valeur);
    }
    let base = vers_base(categorie, de, valeur)?;
    depuis_base(categorie, vers, base)
}

fn inconnue(categorie: Categorie, unite: &str) -> ErreurConversion {
    ErreurConversion::UniteInconnue {
        categorie: categorie.nom(),
        unite: unite.to_string(),
    }
}

/// Valeur exprimée dans l'unité de base de la catégorie.
fn vers_base(categorie: Categorie, unite: &str, v: f64) -> Result<f64, ErreurConversion> {
    use Categorie::*;
    let base = match (categorie, unite) {
        (Longueur, "m") => v,
        (Longueur, "km") => v * 1000.0,
        (Longueur, "cm") => v / 100.0,
        (Longueur, "mm") => v / 1000.0,
        (Longueur, "ft") => v / 3.28084,
        (Longueur, "in") => v / 39.3701,

        (Masse, "kg") => v,
        (Masse, "g") => v / 1000.0,
        (Masse, "lb") => v / 2.20462,
        (Masse, "oz") => v / 35.274,

        (Temperature, "C") => v,
        (Temperature, "F") => (v - 32.0) * 5.0 / 9.0,
        (Temperature, "K") => v - 273.15,

        (Aire, "m2") => v,
        (Aire, "km2") => v * 1_000_000.0,
        (Aire, "cm2") => v / 10_000.0,
        (Aire, "mm2") => v / 1_000_000.0,
        (Aire, "ft2") => v / 10.7639,
        (Aire, "in2") => v / 1550.0031,
        (Aire, "acre") => v * 4046.8564,
        (Aire, "ha") => v * 10_000.0,

        (Vitesse, "mps") => v,
        (Vitesse, "kph") => v / 3.6,
        (Vitesse, "mph") => v / 2.23694,
        (Vitesse, "knot") => v / 1.94384,
        (Vitesse, "fts") => v / 3.28084,

        (Temps, "s") => v,
        (Temps, "min") => v * 60.0,
        (Temps, "h") => v * 3600.0,
        (Temps, "day") => v * 86_400.0,
        (Temps, "week") => v * 604_800.0,
        (Temps, "month") => v * 2_592_000.0,
        (Temps, "year") => v * 31_536_000.0,

        (Angle, "rad") => v,
        (Angle, "deg") => v * (std::f64::consts::PI / 180.0),
        (Angle, "grad") => v * (std::f64::consts::PI / 200.0),

        (Donnees, "bit") => v,
        (Donnees, "byte") => v * 8.0,
        (Donnees, "KB") => v * 8.0 * 1e3,
        (Donnees, "KiB") => v * 8.0 * 1024.0,
        (Donnees, "MB") => v * 8.0 * 1e6,
        (Donnees, "MiB") => v * 8.0 * 1_048_576.0,
        (Donnees, "GB") => v * 8.0 * 1e9,
        (Donnees, "GiB") => v * 8.0 * 1_073_741_824.0,
        (Donnees, "TB") => v * 8.0 * 1e12,
        (Donnees, "TiB") => v * 8.0 * 1_099_511_627_776.0,
        (Donnees, "PB") => v * 8.0 * 1e15,
        (Donnees, "PiB") => v * 8.0 * 1_125_899_906_842_624.0,
        (Donnees, "EB") => v * 8.0 * 1e18,
        (Donnees, "EiB") => v * 8.0 * 1_152_921_504_606_846_976.0,
        (Donnees, "ZB") => v * 8.0 * 1e21,
        (Donnees, "ZiB") => v * 8.0 * 1_180_591_620_717_411_303_424.0,
        (Donnees, "YB") => v * 8.0 * 1e24,
        (Donnees, "YiB") => v * 8.0 * 1_208_925_819_614_629_174_706_176.0,

        (Energie, "J") => v,
        (Energie, "kJ") => v * 1000.0,
        (Energie, "eV") => v * 1.602_176_634e-19,
        (Energie, "cal") => v * 4.184,
        (Energie, "kcal") => v * 4184.0,
        (Energie, "ftlb") => v * 1.355_817_948_331_4,
        (Energie, "BTU") => v * 1055.06,
        (Energie, "Wh") => v * 3600.0,
        (Energie, "kWh") => v * 3_600_000.0,

        (Volume, "m3") => v,
        (Volume, "L") => v / 1000.0,
        (Volume, "mL") => v / 1_000_000.0,
        (Volume, "cm3") => v / 1_000_000.0,
        (Volume, "mm3") => v / 1_000_000_000.0,
        (Volume, "ft3") => v / 35.3147,
        (Volume, "in3") => v / 61_023.7,
        (Volume, "gal_us") => v / 264.172,
        (Volume, "gal_uk") => v / 219.969,
        (Volume, "qt_us") => v / 1056.69,
        (Volume, "qt_uk") => v / 879.877,
        (Volume, "pt_us") => v / 2113.38,
        (Volume, "pt_uk") => v / 1759.75,
        (Volume, "floz_us") => v / 33_814.0,
        (Volume, "floz_uk") => v / 35_195.1,
        (Volume, "cup") => v / 4226.75,
        (Volume, "tbsp") => v / 67_628.0,
        (Volume, "tsp") => v / 202_884.0,

        _ => return Err(inconnue(categorie, unite)),
    };
    Ok(base)
}

/// Valeur de base exprimée dans l'unité demandée.
fn depuis_base(categorie: Categorie, unite: &str, v: f64) -> Result<f64, ErreurConversion> {
    use Categorie::*;
    let sortie = match (categorie, unite) {
        (Longueur, "m") => v,
        (Longueur, "km") => v / 1000.0,
        (Longueur, "cm") => v * 100.0,
        (Longueur, "mm") => v * 1000.0,
        (Longueur, "ft") => v * 3.28084,
        (Longueur, "in") => v * 39.3701,

        (Masse, "kg") => v,
        (Masse, "g") => v * 1000.0,
        (Masse, "lb") => v * 2.20462,
        (Masse, "oz") => v * 35.274,

        (Temperature, "C") => v,
        (Temperature, "F") => v * 9.0 / 5.0 + 32.0,
        (Temperature, "K") => v + 273.15,

        (Aire, "m2") => v,
        (Aire, "km2") => v / 1_000_000.0,
        (Aire, "cm2") => v * 10_000.0,
        (Aire, "mm2") => v * 1_000_000.0,
        (Aire, "ft2") => v * 10.7639,
        (Aire, "in2") => v * 1550.0031,
        (Aire, "acre") => v / 4046.8564,
        (Aire, "ha") => v / 10_000.0,

        (Vitesse, "mps") => v,
        (Vitesse, "kph") => v * 3.6,
        (Vitesse, "mph") => v * 2.23694,
        (Vitesse, "knot") => v * 1.94384,
        (Vitesse, "fts") => v * 3.28084,

        (Temps, "s") => v,
        (Temps, "min") => v / 60.0,
        (Temps, "h") => v / 3600.0,
        (Temps, "day") => v / 86_400.0,
        (Temps, "week") => v / 604_800.0,
        (Temps, "month") => v / 2_592_000.0,
        (Temps, "year") => v / 31_536_000.0,

        (Angle, "rad") => v,
        (Angle, "deg") => v * (180.0 / std::f64::consts::PI),
        (Angle, "grad") => v * (200.0 / std::f64::consts::PI),

        (Donnees, "bit") => v,
        (Donnees, "byte") => v / 8.0,
        (Donnees, "KB") => v / 8.0 / 1e3,
        (Donnees, "KiB") => v / 8.0 / 1024.0,
        (Donnees, "MB") => v / 8.0 / 1e6,
        (Donnees, "MiB") => v / 8.0 / 1_048_576.0,
        (Donnees, "GB") => v / 8.0 / 1e9,
        (Donnees, "GiB") => v / 8.0 / 1_073_741_824.0,
        (Donnees, "TB") => v / 8.0 / 1e12,
        (Donnees, "TiB") => v / 8.0 / 1_099_511_627_776.0,
        (Donnees, "PB") => v / 8.0 / 1e15,
        (Donnees, "PiB") => v / 8.0 / 1_125_899_906_842_624.0,
        (Donnees, "EB") => v / 8.0 / 1e18,
        (Donnees, "EiB") => v / 8.0 / 1_152_921_504_606_846_976.0,
        (Donnees, "ZB") => v / 8.0 / 1e21,
        (Donnees, "ZiB") => v / 8.0 / 1_180_591_620_717_411_303_424.0,
        (Donnees, "YB") => v / 8.0 / 1e24,
        (Donnees, "YiB") => v / 8.0 / 1_208_925_819_614_629_174_706_176.0,

        (Energie, "J") => v,
        (Energie, "kJ") => v / 1000.0,
        (Energie, "eV") => v / 1.602_176_634e-19,
        (Energie, "cal") => v / 4.184,
        (Energie, "kcal") => v / 4184.0,
        (Energie, "ftlb") => v / 1.355_817_948_331_4,
        (Energie, "BTU") => v / 1055.06,
        (Energie, "Wh") => v / 3600.0,
        (Energie, "kWh") => v / 3_600_000.0,

        (Volume, "m3") => v,
        (Volume, "L") => v * 1000.0,
        (Volume, "mL") => v * 1_000_000.0,
        (Volume, "cm3") => v * 1_000_000.0,
        (Volume, "mm3") => v * 1_000_000_000.0,
        (Volume, "ft3") => v * 35.3147,
        (Volume, "in3") => v * 61_023.7,
        (Volume, "gal_us") => v * 264.172,
        (Volume, "gal_uk") => v * 219.969,
        (Volume, "qt_us") => v * 1056.69,
        (Volume, "qt_uk") => v * 879.877,
        (Volume, "pt_us") => v * 2113.38,
        (Volume, "pt_uk") => v * 1759.75,
        (Volume, "floz_us") => v * 33_814.0,
        (Volume, "floz_uk") => v * 35_195.1,
        (Volume, "cup") => v * 4226.75,
        (Volume, "tbsp") => v * 67_628.0,
        (Volume, "tsp") => v * 202_884.0,

        _ => return Err(inconnue(categorie, unite)),
    };
    Ok(sortie)
}
