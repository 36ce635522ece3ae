//! Locale-to-canonical genre data.
//!
//! Many-to-one by design: synonyms from every supported locale converge on
//! one closed English vocabulary that TVHeadend understands. Keys that a
//! later locale shares with an earlier one appear once.

/// Raw genre string -> canonical English genre.
pub(crate) const GENRE_TABLE: &[(&str, &str)] = &[
    // Spanish
    ("Información/Informativo", "News"),
    ("Información/Reportaje", "Documentary"),
    ("Información/Documental", "Documentary"),
    ("Información/Magazine", "News Magazine"),
    ("Información/Deportivo", "Sports"),
    ("Información/Meteorología", "Weather"),
    ("Información/Política", "Politics"),
    ("Entretenimiento/Corazon y sociedad", "Talk Show"),
    ("Entretenimiento/Humor", "Comedy"),
    ("Entretenimiento/Variedades", "Entertainment"),
    ("Entretenimiento/Concurso", "Game Show"),
    ("Entretenimiento/Reality show", "Reality"),
    ("Entretenimiento/Musical", "Music"),
    ("Cine/Película", "Movie"),
    ("Cine/Drama", "Drama"),
    ("Cine/Comedia", "Comedy"),
    ("Cine/Acción", "Action"),
    ("Cine/Thriller", "Thriller"),
    ("Cine/Terror", "Horror"),
    ("Cine/Aventuras", "Adventure"),
    ("Cine/Ciencia ficción", "Science Fiction"),
    ("Cine/Romance", "Romance"),
    ("Cine/Western", "Western"),
    ("Cine/Bélico", "War"),
    ("Cine/Histórico", "Historical"),
    ("Cine/Comedia romántica", "Romantic Comedy"),
    ("Deportes", "Sports"),
    ("Deportes/Fútbol", "Sports"),
    ("Deportes/Motor", "Motorsport"),
    ("Deportes/Baloncesto", "Sports"),
    ("Deportes/Tenis", "Sports"),
    ("Deportes/Ciclismo", "Sports"),
    ("Infantil/Dibujos animados", "Animation"),
    ("Infantil/Juvenil", "Children"),
    ("Infantil/Educativo", "Educational"),
    ("Cultura/Arte", "Arts"),
    ("Cultura/Historia", "Documentary"),
    ("Cultura/Ciencia", "Science"),
    ("Cultura/Naturaleza", "Nature"),
    ("Cultura/Religioso", "Religious"),
    ("Serie/Drama", "Drama"),
    ("Serie/Comedia", "Comedy"),
    ("Serie/Policiaca", "Crime"),
    ("Serie/Acción", "Action"),
    ("Serie/Ciencia ficción", "Science Fiction"),
    ("Serie/Thriller", "Thriller"),
    ("Ocio y Aficiones/Viajes", "Travel"),
    ("Ocio y Aficiones/Gastronomía", "Food"),
    ("Ocio y Aficiones/Decoración", "Lifestyle"),
    ("Ocio y Aficiones/Motor", "Automotive"),
    ("Ocio y Aficiones/Naturaleza", "Nature"),
    ("Ocio y Aficiones/Juegos", "Game Show"),
    ("Música", "Music"),
    ("Música/Pop-Rock", "Music"),
    ("Música/Clásica", "Classical Music"),
    ("Música/Jazz", "Music"),
    ("Teatro", "Performing Arts"),
    ("Danza", "Performing Arts"),
    ("Opera", "Performing Arts"),
    ("Telenovela", "Soap Opera"),
    ("Magacín", "Magazine"),
    ("Debate", "Talk Show"),
    ("Educativo", "Educational"),
    ("Religioso", "Religious"),
    ("Erótico", "Adult"),
    ("Viajes", "Travel"),
    ("Reportaje", "Documentary"),
    ("Informativo", "News"),
    ("Corazón y sociedad", "Talk Show"),
    ("Humor", "Comedy"),
    ("Variedades", "Entertainment"),
    ("Concurso", "Game Show"),
    ("Reality show", "Reality"),
    ("Musical", "Music"),
    ("Película", "Movie"),
    ("Drama", "Drama"),
    ("Comedia", "Comedy"),
    ("Acción", "Action"),
    ("Thriller", "Thriller"),
    ("Terror", "Horror"),
    ("Aventuras", "Adventure"),
    ("Ciencia ficción", "Science Fiction"),
    ("Romance", "Romance"),
    ("Western", "Western"),
    ("Bélico", "War"),
    ("Histórico", "Historical"),
    ("Fútbol", "Sports"),
    ("Motor", "Motorsport"),
    ("Baloncesto", "Sports"),
    ("Tenis", "Sports"),
    ("Ciclismo", "Sports"),
    ("Dibujos animados", "Animation"),
    ("Juvenil", "Children"),
    ("Arte", "Arts"),
    ("Historia", "Documentary"),
    ("Ciencia", "Science"),
    ("Naturaleza", "Nature"),
    ("Policiaca", "Crime"),
    ("Gastronomía", "Food"),
    ("Decoración", "Lifestyle"),
    ("Entretenimiento", "Entertainment"),
    ("Series/Policíaca", "Crime"),
    ("Ocio y Aficiones/Cocina", "Food"),
    ("Documental/Otros", "Documentary"),
    ("Serie/Telenovela", "Soap Opera"),
    ("Cocina", "Food"),
    ("Otros", "Other"),

    // German
    ("Krimi", "Crime"),
    ("Krimiserie", "Crime"),
    ("Kriminalfilm", "Crime"),
    ("Abenteuer", "Adventure"),
    ("Action", "Action"),
    ("Actionfilm", "Action"),
    ("Actionkomödie", "Action"),
    ("Actionserie", "Action"),
    ("Actionthriller", "Action"),
    ("Animation", "Animation"),
    ("Animationsfilm", "Animation"),
    ("Animationsserie", "Animation"),
    ("Aktuelles", "News"),
    ("Nachrichten", "News"),
    ("Dokumentation", "Documentary"),
    ("Dokufilm", "Documentary"),
    ("Dokuserie", "Documentary"),
    ("Dokumentarfilm", "Documentary"),
    ("Komödie", "Comedy"),
    ("Komödienfilm", "Comedy"),
    ("Komödienserie", "Comedy"),
    ("Dramafilm", "Drama"),
    ("Dramaserie", "Drama"),
    ("Psychothriller", "Thriller"),
    ("Thrillerserie", "Thriller"),
    ("Horror", "Horror"),
    ("Horrorfilm", "Horror"),
    ("Horrorserie", "Horror"),
    ("Science Fiction", "Science Fiction"),
    ("Science-Fiction", "Science Fiction"),
    ("Sci-Fi", "Science Fiction"),
    ("Fantasy", "Fantasy"),
    ("Fantasyfilm", "Fantasy"),
    ("Fantasyserie", "Fantasy"),
    ("Romantik", "Romance"),
    ("Liebesfilm", "Romance"),
    ("Liebesdrama", "Romance"),
    ("Westernfilm", "Western"),
    ("Westernserie", "Western"),
    ("Kriegsfilm", "War"),
    ("Kriegsdrama", "War"),
    ("Historienfilm", "Historical"),
    ("Sport", "Sports"),
    ("Sportsendung", "Sports"),
    ("Fußball", "Sports"),
    ("Motorsport", "Motorsport"),
    ("Autorennen", "Motorsport"),
    ("Musik", "Music"),
    ("Musiksendung", "Music"),
    ("Musikfilm", "Music"),
    ("Konzert", "Music"),
    ("Kindersendung", "Children"),
    ("Kinderfilm", "Children"),
    ("Kinderserie", "Children"),
    ("Jugendserie", "Children"),
    ("Jugendfilm", "Children"),
    ("Bildung", "Educational"),
    ("Bildungsprogramm", "Educational"),
    ("Wissenschaft", "Science"),
    ("Natur", "Nature"),
    ("Naturdokumentation", "Nature"),
    ("Tierdokumentation", "Nature"),
    ("Reise", "Travel"),
    ("Reisebericht", "Travel"),
    ("Reisedokumentation", "Travel"),
    ("Kochsendung", "Food"),
    ("Kochen", "Food"),
    ("Lifestyle", "Lifestyle"),
    ("Magazine", "Magazine"),
    ("Magazin", "Magazine"),
    ("Talk", "Talk Show"),
    ("Talkshow", "Talk Show"),
    ("Show", "Entertainment"),
    ("Unterhaltung", "Entertainment"),
    ("Quiz", "Game Show"),
    ("Gameshow", "Game Show"),
    ("Reality-TV", "Reality"),
    ("Reality", "Reality"),
    ("Soap", "Soap Opera"),
    ("Seifenoper", "Soap Opera"),

    // Italian
    ("Animazione", "Animation"),
    ("Cartoni Animati", "Animation"),
    ("Anime", "Animation"),
    ("Azione", "Action"),
    ("Avventura", "Adventure"),
    ("Commedia", "Comedy"),
    ("Drammatico", "Drama"),
    ("Dramma", "Drama"),
    ("Fantascienza", "Science Fiction"),
    ("Romantico", "Romance"),
    ("Guerra", "War"),
    ("Storico", "Historical"),
    ("Poliziesco", "Crime"),
    ("Giallo", "Crime"),
    ("Documentario", "Documentary"),
    ("Notizie", "News"),
    ("Attualità", "News"),
    ("Calcio", "Sports"),
    ("Motori", "Motorsport"),
    ("Musica", "Music"),
    ("Ragazzi e Musica", "Children"),
    ("Bambini", "Children"),
    ("Scienza", "Science"),
    ("Natura", "Nature"),
    ("Viaggi", "Travel"),
    ("Cucina", "Food"),
    ("Talk Show", "Talk Show"),
    ("Spettacolo", "Entertainment"),
    ("Intrattenimento", "Entertainment"),
    ("Soap Opera", "Soap Opera"),
    ("Serie TV", "Series"),
    ("Film", "Movie"),
    ("Altri Programmi", "Other"),
    ("Altri", "Other"),
    ("Altro", "Other"),
    ("Giochi", "Game Show"),
    ("Mondo e Tendenze", "Entertainment"),

    // Dutch
    ("Actie", "Action"),
    ("Actiekomedie", "Action"),
    ("Actieserie", "Action"),
    ("Avontuur", "Adventure"),
    ("Komedie", "Comedy"),
    ("Romantiek", "Romance"),
    ("Oorlog", "War"),
    ("Historisch", "Historical"),
    ("Misdaad", "Crime"),
    ("Documentaire", "Documentary"),
    ("Nieuws", "News"),
    ("Actualiteiten", "News"),
    ("Voetbal", "Sports"),
    ("Muziek", "Music"),
    ("Kinderen", "Children"),
    ("Jeugd", "Children"),
    ("Animatie", "Animation"),
    ("Animatieserie", "Animation"),
    ("Educatief", "Educational"),
    ("Wetenschap", "Science"),
    ("Natuur", "Nature"),
    ("Reizen", "Travel"),
    ("Koken", "Food"),
    ("Amusement", "Entertainment"),
    ("Entertainment", "Entertainment"),
    ("Serie", "Series"),
    ("Aventure", "Adventure"),

    // French
    ("Comédie", "Comedy"),
    ("Drame", "Drama"),
    ("Horreur", "Horror"),
    ("Science-fiction", "Science Fiction"),
    ("Fantastique", "Fantasy"),
    ("Guerre", "War"),
    ("Historique", "Historical"),
    ("Policier", "Crime"),
    ("Actualités", "News"),
    ("Informations", "News"),
    ("Football", "Sports"),
    ("Automobile", "Motorsport"),
    ("Musique", "Music"),
    ("Jeunesse", "Children"),
    ("Éducatif", "Educational"),
    ("Science", "Science"),
    ("Nature", "Nature"),
    ("Voyage", "Travel"),
    ("Cuisine", "Food"),
    ("Talk-show", "Talk Show"),
    ("Divertissement", "Entertainment"),
    ("Jeu", "Game Show"),
    ("Téléréalité", "Reality"),
    ("Feuilleton", "Soap Opera"),
    ("Série", "Series"),

    // Portuguese
    ("Ação", "Action"),
    ("Aventura", "Adventure"),
    ("Comédia", "Comedy"),
    ("Ficção Científica", "Science Fiction"),
    ("Fantasia", "Fantasy"),
    ("Policial", "Crime"),
    ("Documentário", "Documentary"),
    ("Notícias", "News"),
    ("Atualidades", "News"),
    ("Desporto", "Sports"),
    ("Futebol", "Sports"),
    ("Automobilismo", "Motorsport"),
    ("Infantil", "Children"),
    ("Animação", "Animation"),
    ("Ciência", "Science"),
    ("Natureza", "Nature"),
    ("Viagem", "Travel"),
    ("Culinária", "Food"),
    ("Entretenimento", "Entertainment"),
    ("Reality Show", "Reality"),
    ("Filme", "Movie"),

    // Polish
    ("Akcja", "Action"),
    ("Przygodowy", "Adventure"),
    ("Komedia", "Comedy"),
    ("Dramat", "Drama"),
    ("Romans", "Romance"),
    ("Wojenny", "War"),
    ("Historyczny", "Historical"),
    ("Kryminalny", "Crime"),
    ("Dokumentalny", "Documentary"),
    ("Wiadomości", "News"),
    ("Aktualności", "News"),
    ("Piłka nożna", "Sports"),
    ("Muzyka", "Music"),
    ("Dla dzieci", "Children"),
    ("Animacja", "Animation"),
    ("Edukacyjny", "Educational"),
    ("Nauka", "Science"),
    ("Przyroda", "Nature"),
    ("Podróże", "Travel"),
    ("Kuchnia", "Food"),
    ("Magazyn", "Magazine"),
    ("Rozrywka", "Entertainment"),
    ("Opera mydlana", "Soap Opera"),
    ("Serial", "Series"),
];
