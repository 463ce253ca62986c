//! Built-in question banks guaranteeing the trivia pools never run dry.
//!
//! These back every tier before the first external fetch succeeds and keep
//! the game playable if the question source is permanently unreachable.

use crate::dao::models::Difficulty;
use crate::state::trivia::Question;

/// Category attached to every built-in question.
const FALLBACK_CATEGORY: &str = "General";

/// Question text, correct answer, three distractors.
type Row = (&'static str, &'static str, [&'static str; 3]);

/// Built-in bank for one tier.
pub fn fallback_bank(difficulty: Difficulty) -> Vec<Question> {
    let rows: &[Row] = match difficulty {
        Difficulty::Easy => EASY,
        Difficulty::Medium => MEDIUM,
        Difficulty::Hard => HARD,
    };

    rows.iter()
        .map(|(text, correct, distractors)| Question {
            text: (*text).to_string(),
            correct_answer: (*correct).to_string(),
            incorrect_answers: distractors.map(str::to_string),
            category: FALLBACK_CATEGORY.to_string(),
        })
        .collect()
}

const EASY: &[Row] = &[
    ("What planet is known as the Red Planet?", "Mars", ["Venus", "Jupiter", "Saturn"]),
    ("How many continents are there on Earth?", "7", ["5", "6", "8"]),
    ("What is the largest ocean on Earth?", "Pacific Ocean", ["Atlantic Ocean", "Indian Ocean", "Arctic Ocean"]),
    ("What gas do plants absorb from the atmosphere?", "Carbon Dioxide", ["Oxygen", "Nitrogen", "Helium"]),
    ("Which animal is known as the King of the Jungle?", "Lion", ["Tiger", "Elephant", "Bear"]),
    ("What is the chemical symbol for water?", "H2O", ["CO2", "O2", "NaCl"]),
    ("How many legs does a spider have?", "8", ["6", "10", "12"]),
    ("What color are emeralds?", "Green", ["Blue", "Red", "Yellow"]),
    ("Which country is home to the kangaroo?", "Australia", ["New Zealand", "South Africa", "Brazil"]),
    ("What is the hardest natural substance on Earth?", "Diamond", ["Gold", "Iron", "Platinum"]),
    ("How many colors are in a rainbow?", "7", ["5", "6", "8"]),
    ("What is the largest mammal in the world?", "Blue Whale", ["Elephant", "Giraffe", "Hippopotamus"]),
    ("Which planet is closest to the Sun?", "Mercury", ["Venus", "Earth", "Mars"]),
    ("What is the boiling point of water in Celsius?", "100", ["90", "110", "120"]),
    ("How many days are in a leap year?", "366", ["365", "367", "364"]),
    ("What is the smallest prime number?", "2", ["1", "3", "0"]),
    ("Which organ pumps blood through the body?", "Heart", ["Lungs", "Brain", "Liver"]),
    ("What fruit is known for keeping doctors away?", "Apple", ["Banana", "Orange", "Grape"]),
    ("How many sides does a triangle have?", "3", ["4", "5", "6"]),
    ("What is the freezing point of water in Celsius?", "0", ["-10", "10", "32"]),
    ("What is the capital of France?", "Paris", ["London", "Berlin", "Madrid"]),
    ("Which season comes after winter?", "Spring", ["Summer", "Autumn", "Winter"]),
    ("How many months have 31 days?", "7", ["5", "6", "8"]),
    ("What color is a ruby?", "Red", ["Blue", "Green", "Purple"]),
    ("What do bees produce?", "Honey", ["Milk", "Silk", "Wax"]),
    ("Which is the longest river in the world?", "Nile", ["Amazon", "Mississippi", "Yangtze"]),
    ("How many weeks are in a year?", "52", ["48", "50", "54"]),
    ("What is the opposite of 'hot'?", "Cold", ["Warm", "Cool", "Freezing"]),
    ("Which shape has 4 equal sides?", "Square", ["Rectangle", "Triangle", "Circle"]),
    ("What is 12 x 12?", "144", ["124", "132", "156"]),
    ("What animal says 'moo'?", "Cow", ["Sheep", "Pig", "Horse"]),
    ("How many hours are in a day?", "24", ["12", "20", "36"]),
    ("What is the capital of Japan?", "Tokyo", ["Kyoto", "Osaka", "Seoul"]),
    ("Which element has the chemical symbol 'O'?", "Oxygen", ["Gold", "Osmium", "Oganesson"]),
    ("What is the largest desert in the world?", "Sahara", ["Gobi", "Kalahari", "Antarctic"]),
    ("How many zeros are in one million?", "6", ["5", "7", "8"]),
    ("What primary color is made by mixing red and blue?", "Purple", ["Green", "Orange", "Brown"]),
    ("Which planet has rings around it?", "Saturn", ["Mars", "Venus", "Mercury"]),
    ("What is the main ingredient in bread?", "Flour", ["Sugar", "Salt", "Butter"]),
    ("How many strings does a standard guitar have?", "6", ["4", "5", "8"]),
];

const MEDIUM: &[Row] = &[
    ("What year did the Titanic sink?", "1912", ["1905", "1915", "1920"]),
    ("Which element has the atomic number 79?", "Gold", ["Silver", "Platinum", "Copper"]),
    ("What is the speed of light in km/s (approximately)?", "300,000", ["150,000", "500,000", "1,000,000"]),
    ("Who painted the Mona Lisa?", "Leonardo da Vinci", ["Michelangelo", "Raphael", "Donatello"]),
    ("What is the powerhouse of the cell?", "Mitochondria", ["Nucleus", "Ribosome", "Golgi Body"]),
    ("Which country has the most people?", "India", ["China", "USA", "Indonesia"]),
    ("What is the square root of 169?", "13", ["11", "12", "14"]),
    ("In what year did World War II end?", "1945", ["1944", "1946", "1943"]),
    ("What is the currency of Japan?", "Yen", ["Won", "Yuan", "Rupee"]),
    ("Which blood type is the universal donor?", "O negative", ["A positive", "AB positive", "B negative"]),
    ("How many bones are in the adult human body?", "206", ["196", "216", "186"]),
    ("What is the chemical formula for table salt?", "NaCl", ["KCl", "CaCl2", "NaOH"]),
    ("Which planet is known as the Morning Star?", "Venus", ["Mars", "Mercury", "Jupiter"]),
    ("What does DNA stand for?", "Deoxyribonucleic Acid", ["Dinitrogen Acid", "Dynamic Nuclear Acid", "Dual Nucleic Acid"]),
    ("Who wrote 'Romeo and Juliet'?", "William Shakespeare", ["Charles Dickens", "Jane Austen", "Mark Twain"]),
    ("What is the smallest country in the world?", "Vatican City", ["Monaco", "San Marino", "Liechtenstein"]),
    ("How many chromosomes do humans have?", "46", ["44", "48", "42"]),
    ("What is the tallest mountain in the world?", "Mount Everest", ["K2", "Kangchenjunga", "Makalu"]),
    ("Which gas makes up about 78% of Earth's atmosphere?", "Nitrogen", ["Oxygen", "Carbon Dioxide", "Argon"]),
    ("What year was the first iPhone released?", "2007", ["2005", "2008", "2006"]),
];

const HARD: &[Row] = &[
    ("What is the half-life of Carbon-14 (in years)?", "5,730", ["3,200", "8,400", "11,460"]),
    ("In what year was the Treaty of Westphalia signed?", "1648", ["1588", "1712", "1555"]),
    ("What is the Planck constant (in J\u{b7}s)?", "6.626 x 10^-34", ["3.14 x 10^-34", "9.81 x 10^-34", "1.38 x 10^-23"]),
    ("Which mathematician proved Fermat's Last Theorem?", "Andrew Wiles", ["Pierre de Fermat", "Leonhard Euler", "Carl Gauss"]),
    ("What is the deepest point in the ocean?", "Mariana Trench", ["Tonga Trench", "Java Trench", "Puerto Rico Trench"]),
    ("What element has the highest melting point?", "Tungsten", ["Iron", "Titanium", "Carbon"]),
    ("Who developed the theory of General Relativity?", "Albert Einstein", ["Isaac Newton", "Niels Bohr", "Max Planck"]),
    ("What is the capital of Mongolia?", "Ulaanbaatar", ["Astana", "Bishkek", "Tashkent"]),
    ("In computing, what does RAID stand for?", "Redundant Array of Independent Disks", ["Random Access Internal Drive", "Rapid Array of Integrated Data", "Recoverable Archive of Internal Disks"]),
    ("What is the longest bone in the human body?", "Femur", ["Tibia", "Humerus", "Fibula"]),
    ("Which artist cut off part of his own ear?", "Vincent van Gogh", ["Pablo Picasso", "Claude Monet", "Salvador Dali"]),
    ("What is the most abundant element in the universe?", "Hydrogen", ["Helium", "Oxygen", "Carbon"]),
    ("In what year did the Berlin Wall fall?", "1989", ["1987", "1991", "1985"]),
    ("What is the only mammal capable of true flight?", "Bat", ["Flying Squirrel", "Sugar Glider", "Colugo"]),
    ("What language has the most native speakers?", "Mandarin Chinese", ["English", "Spanish", "Hindi"]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tier_has_a_bank() {
        assert_eq!(fallback_bank(Difficulty::Easy).len(), 40);
        assert_eq!(fallback_bank(Difficulty::Medium).len(), 20);
        assert_eq!(fallback_bank(Difficulty::Hard).len(), 15);
    }

    #[test]
    fn bank_questions_are_unique_within_a_tier() {
        for difficulty in Difficulty::ALL {
            let bank = fallback_bank(difficulty);
            let mut texts: Vec<&str> = bank.iter().map(|q| q.text.as_str()).collect();
            texts.sort_unstable();
            texts.dedup();
            assert_eq!(texts.len(), bank.len(), "duplicate question in {difficulty}");
        }
    }
}
