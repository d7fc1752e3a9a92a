//! Word banks and grammatical categories
//!
//! Static per-persona lexicons, five lists per persona. This is pure data:
//! nothing here is mutated at runtime, sessions draw from working copies
//! built in [`crate::sim::bag`].

use serde::{Deserialize, Serialize};

/// Grammatical slot categories, in template order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Subject,
    Verb,
    Object,
    Place,
    Adjective,
}

/// The grammatical shape of one sentence: every sentence fills these five
/// slots in order.
pub const TEMPLATE: [Category; 5] = [
    Category::Subject,
    Category::Verb,
    Category::Object,
    Category::Place,
    Category::Adjective,
];

impl Category {
    /// Slot position within [`TEMPLATE`]
    pub fn index(self) -> usize {
        match self {
            Category::Subject => 0,
            Category::Verb => 1,
            Category::Object => 2,
            Category::Place => 3,
            Category::Adjective => 4,
        }
    }

    /// HUD label (Spanish, as displayed to the player)
    pub fn label(self) -> &'static str {
        match self {
            Category::Subject => "Sujeto",
            Category::Verb => "Verbo",
            Category::Object => "Cosa",
            Category::Place => "Lugar",
            Category::Adjective => "Adjetivo",
        }
    }

    /// Important categories glow and grant a small time bonus when caught
    pub fn is_important(self) -> bool {
        matches!(self, Category::Object | Category::Adjective)
    }
}

/// One persona's full lexicon plus menu metadata
#[derive(Debug)]
pub struct WordBank {
    pub id: &'static str,
    pub label: &'static str,
    pub tagline: &'static str,
    pub prompt: &'static str,
    subjects: &'static [&'static str],
    verbs: &'static [&'static str],
    objects: &'static [&'static str],
    places: &'static [&'static str],
    adjectives: &'static [&'static str],
}

impl WordBank {
    /// Look up a built-in persona lexicon by id
    pub fn builtin(id: &str) -> Option<&'static WordBank> {
        PERSONAS.iter().find(|b| b.id == id)
    }

    /// All built-in personas, menu order
    pub fn all() -> &'static [WordBank] {
        &PERSONAS
    }

    /// The source list for one category
    pub fn list(&self, category: Category) -> &'static [&'static str] {
        match category {
            Category::Subject => self.subjects,
            Category::Verb => self.verbs,
            Category::Object => self.objects,
            Category::Place => self.places,
            Category::Adjective => self.adjectives,
        }
    }
}

static PERSONAS: [WordBank; 4] = [
    WordBank {
        id: "ciela",
        label: "Ciela",
        tagline: "La sabia",
        prompt: "Ciela (la sabia): armá un cuento con pistas, ideas y sentido.",
        subjects: &[
            "Ciela",
            "una maestra",
            "un libro",
            "una brújula",
            "una pregunta",
            "un mapa",
            "un consejo",
            "una lámpara",
            "una nota",
        ],
        verbs: &[
            "explica",
            "ordena",
            "descifra",
            "enseña",
            "observa",
            "piensa",
            "elige",
            "recuerda",
            "anota",
            "relaciona",
        ],
        objects: &[
            "una idea",
            "una regla",
            "una verdad",
            "una pista",
            "un secreto",
            "una palabra justa",
            "un plan",
            "una señal",
            "una respuesta",
        ],
        places: &[
            "en la biblioteca",
            "en el bosque",
            "bajo la luna",
            "junto al río",
            "en un aula secreta",
            "en el claro",
            "en el sendero",
            "en la colina",
        ],
        adjectives: &[
            "clara",
            "sabia",
            "precisa",
            "profunda",
            "serena",
            "paciente",
            "atenta",
            "brillante",
            "justa",
        ],
    },
    WordBank {
        id: "nuve",
        label: "Nuve",
        tagline: "La tranquila",
        prompt: "Nuve (la tranquila): armá un cuento suave, calmado y luminoso.",
        subjects: &[
            "Nuve",
            "una nube",
            "una brisa",
            "un susurro",
            "una estrella lenta",
            "un abrazo",
            "una pluma",
            "un sueño",
            "una ola",
        ],
        verbs: &[
            "flota",
            "respira",
            "acompaña",
            "calma",
            "espera",
            "sonríe",
            "escucha",
            "sueña",
            "abraza",
            "alumbra",
        ],
        objects: &[
            "una paz",
            "una melodía",
            "una luz tibia",
            "una promesa",
            "un té",
            "una canción bajita",
            "una manta",
            "un silencio",
            "un minuto",
        ],
        places: &[
            "en la tarde",
            "en el cielo",
            "en un jardín",
            "cerca del mar",
            "bajo una manta",
            "en una siesta",
            "en la ventana",
            "en un patio",
        ],
        adjectives: &[
            "suave",
            "tranquila",
            "lenta",
            "cálida",
            "amable",
            "delicada",
            "lumínica",
            "dulce",
            "serena",
        ],
    },
    WordBank {
        id: "nuveciela",
        label: "Nuveciela",
        tagline: "La fuerte",
        prompt: "Nuveciela (la fuerte): armá un cuento valiente, con decisión y corazón.",
        subjects: &[
            "Nuveciela",
            "una guardiana",
            "una tormenta",
            "un escudo",
            "una montaña",
            "una amiga leal",
            "un juramento",
            "un faro",
            "un tambor",
        ],
        verbs: &[
            "protege",
            "enfrenta",
            "resiste",
            "levanta",
            "decide",
            "defiende",
            "corre",
            "salva",
            "avanza",
            "rompe",
        ],
        objects: &[
            "una fuerza",
            "una chispa",
            "una bandera",
            "una puerta",
            "una llave",
            "un mensaje",
            "un camino",
            "una promesa",
            "un destino",
        ],
        places: &[
            "en la noche",
            "en la cima",
            "en el bosque",
            "en un puente",
            "bajo la lluvia",
            "en la plaza",
            "en la entrada",
            "en la sombra",
        ],
        adjectives: &[
            "valiente",
            "firme",
            "decidida",
            "leal",
            "poderosa",
            "intensa",
            "enorme",
            "noble",
            "rápida",
        ],
    },
    WordBank {
        id: "lunaria",
        label: "Lunaria",
        tagline: "La inventora",
        prompt: "Lunaria (la inventora): armá un cuento raro, creativo y lleno de inventos.",
        subjects: &[
            "Lunaria",
            "un robot",
            "un engranaje",
            "una antena",
            "un telescopio",
            "una máquina",
            "un rayo",
            "un dron",
            "un resorte",
        ],
        verbs: &[
            "inventa",
            "construye",
            "mezcla",
            "prueba",
            "enciende",
            "calibra",
            "transforma",
            "programa",
            "repara",
            "activa",
        ],
        objects: &[
            "un prototipo",
            "un botón",
            "una chispa",
            "un imán",
            "un plano",
            "una fórmula",
            "un truco",
            "un motor",
            "un cristal",
        ],
        places: &[
            "en el taller",
            "en un laboratorio",
            "en la luna",
            "en una cueva eléctrica",
            "en el cielo",
            "en un garaje secreto",
            "en la torre",
            "en el hangar",
        ],
        adjectives: &[
            "curiosa",
            "eléctrica",
            "nueva",
            "extraña",
            "brillante",
            "imposible",
            "genial",
            "magnética",
            "fantástica",
        ],
    },
];
