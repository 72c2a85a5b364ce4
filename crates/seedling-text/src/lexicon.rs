//! The fixed word list used for pseudo-text synthesis.

/// Lowercase pseudo-Latin words, sorted alphabetically.
#[rustfmt::skip]
pub static LEXICON: [&str; 465] = [
    "a", "ab", "abhorreant", "accommodare", "accumsan", "accusam", "accusamus", "accusata", "ad",
    "adhuc", "adipisci", "adipiscing", "admodum", "adolescens", "adversarium", "aeque", "aeterno",
    "affert", "agam", "albucius", "alia", "alienum", "alii", "aliquam", "aliquando", "aliquid",
    "aliquip", "alterum", "amet", "an", "ancillae", "animal", "antiopam", "apeirian", "aperiam",
    "aperiri", "appareat", "appetere", "argumentum", "assentior", "assueverit", "assum", "at",
    "atomorum", "atqui", "audiam", "audire", "augue", "autem", "blandit", "bonorum", "brute",
    "causae", "cetero", "choro", "civibus", "clita", "commodo", "commune", "complectitur",
    "concludaturque", "conclusionemque", "congue", "consectetuer", "consectetur", "consequat",
    "consequuntur", "consetetur", "constituam", "constituto", "consul", "contentiones", "convenire",
    "copiosae", "corpora", "corrumpit", "cotidieque", "cu", "cum", "curae", "diam", "dicam",
    "dicant", "dicat", "dicit", "dico", "dicta", "dictas", "dignissim", "discere", "disputando",
    "disputationi", "dissentiet", "dissentiunt", "docendi", "doctus", "dolor", "dolore", "dolorem",
    "dolores", "dolorum", "doming", "duis", "duo", "ea", "eam", "eirmod", "eius", "electram",
    "eleifend", "eligendi", "elit", "elitr", "eloquentiam", "enim", "eos", "epicurei", "epicuri",
    "equidem", "erant", "erat", "eripuit", "errem", "error", "erroribus", "eruditi", "esse",
    "essent", "est", "et", "etiam", "eu", "euismod", "eum", "euripidis", "everti", "evertitur",
    "ex", "exerci", "expetenda", "expetendis", "explicari", "fabellas", "fabulas", "facer",
    "facete", "facilis", "facilisi", "facilisis", "falli", "fastidii", "ferri", "feugait",
    "feugiat", "fierent", "forensibus", "fugit", "fuisset", "gloriatur", "graece", "graeci",
    "graecis", "gubergren", "habemus", "habeo", "harum", "has", "hendrerit", "hinc", "his",
    "homero", "honestatis", "id", "idque", "ignota", "iisque", "illud", "illum", "impedit",
    "imperdiet", "inani", "inciderint", "incorrupte", "indoctum", "inermis", "inimicus", "insolens",
    "instructior", "integre", "intellegam", "intellegat", "intellegebat", "interesset",
    "interpretaris", "invenire", "invidunt", "ipsum", "iracundia", "iriure", "iudicabit", "iudico",
    "ius", "iusto", "iuvaret", "justo", "labitur", "laboramus", "labore", "labores", "laoreet",
    "latine", "laudem", "legendos", "legere", "legimus", "liber", "liberavisse", "libris",
    "lobortis", "lorem", "lucilius", "ludus", "luptatum", "magna", "maiestatis", "maiorum", "malis",
    "malorum", "maluisset", "mandamus", "mazim", "mea", "mediocrem", "mediocritatem", "mei", "meis",
    "mel", "meliore", "melius", "menandri", "mentitum", "minim", "minimum", "mnesarchum",
    "moderatius", "modo", "modus", "molestiae", "molestie", "mollis", "movet", "mucius", "mundi",
    "munere", "mutat", "nam", "natum", "ne", "nec", "necessitatibus", "neglegentur", "nemore",
    "nibh", "nihil", "nisl", "no", "nobis", "noluisse", "nominati", "nominavi", "nonumes", "nonumy",
    "noster", "nostrud", "nostrum", "novum", "nulla", "nullam", "numquam", "nusquam", "oblique",
    "ocurreret", "odio", "offendit", "officiis", "omittam", "omittantur", "omnes", "omnesque",
    "omnis", "omnium", "oporteat", "oportere", "option", "oratio", "orationem", "ornatus", "partem",
    "partiendo", "patrioque", "paulo", "per", "percipit", "percipitur", "perfecto", "pericula",
    "periculis", "perpetua", "persecuti", "persequeris", "persius", "pertinacia", "pertinax",
    "petentium", "phaedrum", "philosophia", "placerat", "platonem", "ponderum", "populo", "porro",
    "posidonium", "posse", "possim", "possit", "postea", "postulant", "praesent", "pri", "prima",
    "primis", "principes", "pro", "probatus", "probo", "prodesset", "prompta", "propriae", "purto",
    "putant", "putent", "quaeque", "quaerendum", "quaestio", "qualisque", "quando", "quas", "quem",
    "qui", "quidam", "quis", "quo", "quod", "quodsi", "quot", "rationibus", "rebum", "recteque",
    "recusabo", "referrentur", "reformidans", "regione", "reprehendunt", "reprimique",
    "repudiandae", "repudiare", "reque", "ridens", "sadipscing", "saepe", "sale", "salutandi",
    "salutatus", "sanctus", "saperet", "sapientem", "scaevola", "scribentur", "scripserit",
    "scripta", "scriptorem", "sea", "sed", "semper", "senserit", "sensibus", "sententiae",
    "signiferumque", "similique", "simul", "singulis", "sit", "soleat", "solet", "solum", "soluta",
    "sonet", "splendide", "stet", "suas", "suavitate", "summo", "sumo", "suscipiantur", "suscipit",
    "tacimates", "tale", "tamquam", "tantas", "tation", "te", "tempor", "temporibus",
    "theophrastus", "tibique", "timeam", "tincidunt", "tollit", "torquatos", "tota", "tractatos",
    "tritani", "ubique", "ullamcorper", "ullum", "unum", "urbanitas", "usu", "ut", "utamur",
    "utinam", "utroque", "vel", "velit", "veniam", "verear", "veri", "veritus", "vero", "verterem",
    "vide", "viderer", "vidisse", "vidit", "vim", "viris", "virtute", "vis", "vitae", "vituperata",
    "vituperatoribus", "vivendo", "vivendum", "vix", "vocent", "vocibus", "volumus", "voluptaria",
    "voluptatibus", "voluptatum", "voluptua", "volutpat", "vulputate", "wisi", "zril",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lexicon_words_are_lowercase_ascii() {
        for word in LEXICON {
            assert!(!word.is_empty());
            assert!(word.chars().all(|c| c.is_ascii_lowercase()), "{word}");
        }
    }

    #[test]
    fn test_lexicon_words_are_distinct() {
        let distinct: HashSet<&str> = LEXICON.iter().copied().collect();
        assert_eq!(distinct.len(), LEXICON.len());
    }

    #[test]
    fn test_lexicon_is_sorted() {
        assert!(LEXICON.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(LEXICON.binary_search(&"lorem"), Ok(219));
        assert_eq!(LEXICON.binary_search(&"ipsum"), Ok(196));
        assert_eq!(LEXICON.binary_search(&"dolor"), Ok(96));
    }
}
