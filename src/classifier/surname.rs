use crate::classifier::categories::UNKNOWN;
use crate::classifier::NameClassifier;

/// Offline strategy: a surname table, then affix rules. Needs no model and
/// no network, so it is also the baseline column on the comparison page.
pub struct SurnameClassifier;

// (category, known surnames), lowercase ASCII.
const SURNAMES: &[(&str, &[&str])] = &[
    ("Arabic", &["ahmed", "ahmad", "mohamed", "mohammed", "muhammad", "hassan", "hussein", "abdullah", "khalil", "haddad", "nasser", "saleh", "mansour", "ibrahim", "khoury"]),
    ("Chinese", &["wang", "li", "zhang", "liu", "chen", "yang", "huang", "zhao", "wu", "zhou", "xu", "sun", "lin", "wei", "zhu", "guo", "chan", "wong"]),
    ("Czech", &["novak", "svoboda", "novotny", "dvorak", "cerny", "prochazka", "kucera", "vesely", "horak", "nemec"]),
    ("Dutch", &["jansen", "janssen", "vries", "bakker", "visser", "smit", "meijer", "mulder", "dekker", "brouwer", "hendriks", "dijkstra"]),
    ("English", &["smith", "johnson", "williams", "brown", "jones", "taylor", "davies", "wilson", "evans", "roberts", "walker", "wright", "thompson", "white", "hughes", "edwards", "green", "hall", "wood", "harris", "clarke", "jackson", "baker", "cooper"]),
    ("French", &["bernard", "dubois", "durand", "lefebvre", "leroy", "moreau", "laurent", "michel", "garnier", "fournier", "girard", "bonnet", "dupont", "lambert", "rousseau", "fontaine"]),
    ("German", &["muller", "mueller", "schmidt", "schneider", "fischer", "weber", "meyer", "wagner", "becker", "schulz", "hoffmann", "schafer", "koch", "richter", "klein", "wolf", "schroder", "neumann", "braun", "krueger"]),
    ("Greek", &["papadopoulos", "pappas", "georgiou", "nikolaidis", "christodoulou", "karagiannis", "vlachos", "dimitriou", "alexiou"]),
    ("Indian", &["patel", "sharma", "singh", "kumar", "gupta", "shah", "reddy", "rao", "iyer", "nair", "mehta", "joshi", "desai", "chopra", "kapoor", "malhotra"]),
    ("Irish", &["murphy", "kelly", "sullivan", "walsh", "byrne", "ryan", "oconnor", "obrien", "doyle", "gallagher", "doherty", "kennedy", "lynch", "quinn", "brennan", "fitzgerald"]),
    ("Italian", &["rossi", "russo", "ferrari", "esposito", "bianchi", "romano", "colombo", "ricci", "marino", "greco", "bruno", "gallo", "conti", "deluca", "giordano", "mancini", "rizzo", "lombardi", "moretti"]),
    ("Japanese", &["sato", "suzuki", "takahashi", "tanaka", "watanabe", "ito", "yamamoto", "nakamura", "kobayashi", "kato", "yoshida", "yamada", "sasaki", "matsumoto", "inoue", "kimura", "hayashi", "shimizu"]),
    ("Korean", &["kim", "park", "choi", "jeong", "jung", "kang", "cho", "yoon", "jang", "kwon", "hwang", "ahn", "seo", "shin"]),
    ("Polish", &["nowak", "kowalski", "wisniewski", "wojcik", "kowalczyk", "kaminski", "lewandowski", "zielinski", "szymanski", "wozniak", "dabrowski", "mazur", "krawczyk"]),
    ("Portuguese", &["silva", "santos", "ferreira", "pereira", "oliveira", "costa", "martins", "sousa", "souza", "fernandes", "goncalves", "gomes", "marques", "almeida", "ribeiro", "pinto", "carvalho", "teixeira"]),
    ("Russian", &["ivanov", "smirnov", "kuznetsov", "popov", "vasiliev", "petrov", "sokolov", "mikhailov", "novikov", "fedorov", "morozov", "volkov", "lebedev", "pavlov", "kozlov", "orlov", "romanov"]),
    ("Scottish", &["macdonald", "campbell", "stewart", "robertson", "macleod", "mackenzie", "fraser", "mackay", "cameron", "ross", "grant", "murray", "mcgregor", "macgregor", "douglas", "buchanan", "crawford"]),
    ("Spanish", &["garcia", "rodriguez", "martinez", "hernandez", "lopez", "gonzalez", "perez", "sanchez", "ramirez", "torres", "flores", "rivera", "gomez", "diaz", "morales", "reyes", "cruz", "ortiz", "gutierrez", "chavez", "ramos", "ruiz", "alvarez", "mendoza", "castillo", "jimenez", "moreno", "romero", "vargas", "herrera", "medina", "castro", "fernandez", "delgado"]),
    ("Vietnamese", &["nguyen", "tran", "le", "pham", "hoang", "huynh", "phan", "vu", "vo", "dang", "bui", "ngo", "duong", "truong"]),
];

// (category, prefixes, suffixes). Tried only when no token is in the table.
const AFFIXES: &[(&str, &[&str], &[&str])] = &[
    ("Irish", &["o'"], &[]),
    ("Scottish", &["mac", "mc"], &[]),
    ("Polish", &[], &["ski", "ska", "wicz", "czyk", "czak"]),
    ("Greek", &[], &["poulos", "akis", "idis", "opoulou"]),
    ("Russian", &[], &["ov", "ova", "ev", "eva", "enko", "vich"]),
    ("Italian", &[], &["ini", "elli", "etti", "ucci", "acci"]),
    ("German", &[], &["mann", "stein", "bauer"]),
    ("Japanese", &[], &["yama", "moto", "mura", "shita", "kawa", "guchi", "zaki"]),
    ("Spanish", &[], &["ez"]),
];

// Very short tokens hit too many affixes by accident.
const MIN_AFFIX_LEN: usize = 4;

fn tokens(name: &str) -> Vec<String> {
    name.split(|c: char| !(c.is_alphabetic() || c == '\''))
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Tokens with the likely surname first: the leading token of a
/// `SURNAME, GIVEN` name, otherwise the last one. Given names such as Kim or
/// Grant are also surnames, so they only count when the surname misses.
fn surname_first(name: &str) -> Vec<String> {
    let mut tokens = tokens(name);
    if !name.contains(',') {
        if let Some(last) = tokens.pop() {
            tokens.insert(0, last);
        }
    }
    tokens
}

impl SurnameClassifier {
    pub fn classify_one(&self, name: &str) -> String {
        let tokens = surname_first(name);

        for token in &tokens {
            let bare = token.replace('\'', "");
            if let Some((cat, _)) = SURNAMES.iter().find(|(_, list)| list.contains(&bare.as_str())) {
                return cat.to_string();
            }
        }

        for token in tokens.iter().filter(|t| t.len() >= MIN_AFFIX_LEN) {
            let hit = AFFIXES.iter().find(|(_, prefixes, suffixes)| {
                prefixes.iter().any(|p| token.starts_with(p))
                    || suffixes.iter().any(|s| token.ends_with(s))
            });
            if let Some((cat, _, _)) = hit {
                return cat.to_string();
            }
        }

        UNKNOWN.to_string()
    }
}

impl NameClassifier for SurnameClassifier {
    fn strategy(&self) -> &str {
        "surname"
    }

    fn classify(&self, names: &[String]) -> Vec<String> {
        names.iter().map(|n| self.classify_one(n)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::categories::NATIONALITY_CATEGORIES;

    #[test]
    fn table_hits_in_any_position() {
        let clf = SurnameClassifier;
        assert_eq!(clf.classify_one("Maria Garcia"), "Spanish");
        assert_eq!(clf.classify_one("GARCIA, MARIA"), "Spanish");
        assert_eq!(clf.classify_one("Li Wei"), "Chinese");
        assert_eq!(clf.classify_one("NGUYEN THANH & LAN"), "Vietnamese");
        assert_eq!(clf.classify_one("Sean O'Brien"), "Irish");
    }

    #[test]
    fn surname_outranks_given_name() {
        let clf = SurnameClassifier;
        assert_eq!(clf.classify_one("Kim Smith"), "English");
        assert_eq!(clf.classify_one("Grant Nguyen"), "Vietnamese");
        assert_eq!(clf.classify_one("Kelly Rossi"), "Italian");
        assert_eq!(clf.classify_one("SMITH, KIM"), "English");
        // Given name still decides when the surname is not known.
        assert_eq!(clf.classify_one("Kim Zzyzx"), "Korean");
    }

    #[test]
    fn affix_rules() {
        let clf = SurnameClassifier;
        assert_eq!(clf.classify_one("Anna Brzezinski"), "Polish");
        assert_eq!(clf.classify_one("Nikos Antonopoulos"), "Greek");
        assert_eq!(clf.classify_one("Dmitri Belyaev"), "Russian");
        assert_eq!(clf.classify_one("Angus MacAllister"), "Scottish");
        assert_eq!(clf.classify_one("Liam O'Hanlon"), "Irish");
        assert_eq!(clf.classify_one("Hiro Akiyama"), "Japanese");
    }

    #[test]
    fn organisations_are_unknown() {
        let clf = SurnameClassifier;
        assert_eq!(clf.classify_one("ACME HOLDINGS LLC"), UNKNOWN);
        assert_eq!(clf.classify_one(""), UNKNOWN);
    }

    #[test]
    fn table_only_uses_known_categories() {
        for (cat, _) in SURNAMES {
            assert!(NATIONALITY_CATEGORIES.contains(cat));
        }
        for (cat, _, _) in AFFIXES {
            assert!(NATIONALITY_CATEGORIES.contains(cat));
        }
    }

    #[test]
    fn batch_keeps_length_and_order() {
        let names = vec!["Li Wei".to_string(), "Zorg".to_string(), "Maria Garcia".to_string()];
        assert_eq!(
            SurnameClassifier.classify(&names),
            vec!["Chinese", UNKNOWN, "Spanish"]
        );
    }
}
