//! Curated Spanish → English genre vocabulary.
//!
//! Each key is a lowercase Spanish term (with and without accents, plus the
//! common inflections). Its targets are English genre names as the provider
//! publishes them in `en-US`; earlier targets are the better fit.

/// Spanish term → English canonical genre names, in priority order
pub const SYNONYMS: &[(&str, &[&str])] = &[
    // Action
    ("accion", &["action", "adventure", "action & adventure", "thriller"]),
    ("acción", &["action", "adventure", "action & adventure", "thriller"]),
    ("aventura", &["adventure", "action & adventure", "action"]),
    ("aventuras", &["adventure", "action & adventure", "action"]),
    ("adrenalina", &["action", "thriller", "adventure"]),
    ("emocion", &["action", "thriller", "adventure"]),
    ("emoción", &["action", "thriller", "adventure"]),
    // Comedy
    ("comedia", &["comedy", "family"]),
    ("comedias", &["comedy", "family"]),
    ("comico", &["comedy"]),
    ("cómico", &["comedy"]),
    ("divertido", &["comedy", "family"]),
    ("divertida", &["comedy", "family"]),
    ("gracioso", &["comedy"]),
    ("graciosa", &["comedy"]),
    ("humor", &["comedy"]),
    ("risa", &["comedy"]),
    ("risas", &["comedy"]),
    // Horror
    ("terror", &["horror", "thriller"]),
    ("horror", &["horror", "thriller"]),
    ("miedo", &["horror", "thriller"]),
    ("suspenso", &["thriller", "horror", "mystery"]),
    ("suspense", &["thriller", "horror", "mystery"]),
    ("escalofriante", &["horror", "thriller"]),
    ("escalofriantes", &["horror", "thriller"]),
    // Drama
    ("drama", &["drama"]),
    ("dramas", &["drama"]),
    ("dramatico", &["drama"]),
    ("dramático", &["drama"]),
    ("emotivo", &["drama", "romance"]),
    ("emotiva", &["drama", "romance"]),
    ("sentimental", &["drama", "romance"]),
    // Romance
    ("romance", &["romance", "drama"]),
    ("romantica", &["romance", "drama"]),
    ("romántica", &["romance", "drama"]),
    ("romantico", &["romance", "drama"]),
    ("romántico", &["romance", "drama"]),
    ("amor", &["romance", "drama"]),
    ("amorosa", &["romance", "drama"]),
    ("amoroso", &["romance", "drama"]),
    ("pareja", &["romance", "drama"]),
    // Science fiction
    ("ciencia ficcion", &["science fiction", "fantasy", "action"]),
    ("ciencia ficción", &["science fiction", "fantasy", "action"]),
    ("sci-fi", &["science fiction", "fantasy", "action"]),
    ("scifi", &["science fiction", "fantasy", "action"]),
    ("futurista", &["science fiction", "action"]),
    ("futuristas", &["science fiction", "action"]),
    ("espacial", &["science fiction", "adventure"]),
    ("espaciales", &["science fiction", "adventure"]),
    ("aliens", &["science fiction", "thriller"]),
    ("extraterrestres", &["science fiction", "thriller"]),
    // Fantasy
    ("fantasia", &["fantasy", "adventure"]),
    ("fantasía", &["fantasy", "adventure"]),
    ("magia", &["fantasy", "adventure"]),
    ("magico", &["fantasy", "adventure"]),
    ("mágico", &["fantasy", "adventure"]),
    ("magica", &["fantasy", "adventure"]),
    ("mágica", &["fantasy", "adventure"]),
    ("superheroes", &["action", "adventure", "fantasy", "science fiction"]),
    ("superhéroes", &["action", "adventure", "fantasy", "science fiction"]),
    // Animation
    ("animacion", &["animation", "family", "comedy"]),
    ("animación", &["animation", "family", "comedy"]),
    ("animada", &["animation", "family", "comedy"]),
    ("animado", &["animation", "family", "comedy"]),
    ("caricaturas", &["animation", "family", "comedy"]),
    ("dibujos", &["animation", "family", "comedy"]),
    // Family
    ("familia", &["family", "comedy", "animation"]),
    ("familiar", &["family", "comedy", "animation"]),
    ("familiares", &["family", "comedy", "animation"]),
    ("niños", &["family", "animation", "comedy"]),
    ("infantil", &["family", "animation", "comedy"]),
    ("infantiles", &["family", "animation", "comedy"]),
    // Crime and mystery
    ("crimen", &["crime", "thriller", "mystery"]),
    ("crimenes", &["crime", "thriller", "mystery"]),
    ("crímenes", &["crime", "thriller", "mystery"]),
    ("policial", &["crime", "thriller", "mystery"]),
    ("policiales", &["crime", "thriller", "mystery"]),
    ("detective", &["crime", "thriller", "mystery"]),
    ("detectives", &["crime", "thriller", "mystery"]),
    ("misterio", &["mystery", "thriller", "crime"]),
    ("misterios", &["mystery", "thriller", "crime"]),
    ("investigacion", &["crime", "mystery", "thriller"]),
    ("investigación", &["crime", "mystery", "thriller"]),
    // Thriller
    ("thriller", &["thriller", "action", "crime", "mystery"]),
    ("thrillers", &["thriller", "action", "crime", "mystery"]),
    ("tension", &["thriller", "horror", "mystery"]),
    ("tensión", &["thriller", "horror", "mystery"]),
    // Documentary
    ("documental", &["documentary"]),
    ("documentales", &["documentary"]),
    ("educativo", &["documentary"]),
    ("educativa", &["documentary"]),
    ("educativos", &["documentary"]),
    ("educativas", &["documentary"]),
    // War
    ("guerra", &["war", "war & politics", "action", "drama"]),
    ("guerras", &["war", "war & politics", "action", "drama"]),
    ("belico", &["war", "war & politics", "action"]),
    ("bélico", &["war", "war & politics", "action"]),
    ("belica", &["war", "war & politics", "action"]),
    ("bélica", &["war", "war & politics", "action"]),
    ("militar", &["war", "war & politics", "action"]),
    ("militares", &["war", "war & politics", "action"]),
    // Music
    ("musica", &["music"]),
    ("música", &["music"]),
    ("musical", &["music", "comedy"]),
    ("musicales", &["music", "comedy"]),
    ("concierto", &["music"]),
    ("conciertos", &["music"]),
    // History
    ("historia", &["history", "drama", "war"]),
    ("historias", &["history", "drama", "war"]),
    ("historico", &["history", "drama", "war"]),
    ("histórico", &["history", "drama", "war"]),
    ("historica", &["history", "drama", "war"]),
    ("histórica", &["history", "drama", "war"]),
    ("epoca", &["history", "drama"]),
    ("época", &["history", "drama"]),
    // Biography
    ("biografia", &["biography", "drama", "history"]),
    ("biografía", &["biography", "drama", "history"]),
    ("biografico", &["biography", "drama", "history"]),
    ("biográfico", &["biography", "drama", "history"]),
    ("biografica", &["biography", "drama", "history"]),
    ("biográfica", &["biography", "drama", "history"]),
    // Western
    ("western", &["western", "action", "adventure"]),
    ("westerns", &["western", "action", "adventure"]),
    ("vaqueros", &["western", "action", "adventure"]),
    ("oeste", &["western", "action", "adventure"]),
    // Sport
    ("deportes", &["sport", "drama"]),
    ("deporte", &["sport", "drama"]),
    ("deportivo", &["sport", "drama"]),
    ("deportiva", &["sport", "drama"]),
    ("deportivos", &["sport", "drama"]),
    ("deportivas", &["sport", "drama"]),
];

/// Spelling and accent variants that count as the same word
pub const VARIANTS: &[(&str, &[&str])] = &[
    ("accion", &["acción"]),
    ("acción", &["accion"]),
    ("ciencia ficcion", &["ciencia ficción", "sci-fi", "scifi"]),
    ("ciencia ficción", &["ciencia ficcion", "sci-fi", "scifi"]),
    ("fantasia", &["fantasía"]),
    ("fantasía", &["fantasia"]),
    ("romantica", &["romántica", "romance"]),
    ("romántica", &["romantica", "romance"]),
    ("romantico", &["romántico", "romance"]),
    ("romántico", &["romantico", "romance"]),
    ("musica", &["música"]),
    ("música", &["musica"]),
    ("biografia", &["biografía"]),
    ("biografía", &["biografia"]),
    ("animacion", &["animación"]),
    ("animación", &["animacion"]),
    ("superheroes", &["superhéroes", "super heroes", "super héroes"]),
    ("superhéroes", &["superheroes", "super heroes", "super héroes"]),
];

/// Exact lookup of a normalized term
pub fn lookup(term: &str) -> Option<&'static [&'static str]> {
    SYNONYMS
        .iter()
        .find(|(key, _)| *key == term)
        .map(|(_, targets)| *targets)
}

/// Whether two normalized terms are listed as variants of each other
pub fn are_variants(a: &str, b: &str) -> bool {
    let listed = |from: &str, to: &str| {
        VARIANTS
            .iter()
            .any(|(key, others)| *key == from && others.contains(&to))
    };
    listed(a, b) || listed(b, a)
}
