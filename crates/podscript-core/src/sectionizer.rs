//! Script Sectionizer — sorts generated script lines into narrative sections.
//! Matching is exact, case-sensitive substring containment; first marker hit wins.

use serde::Serialize;

/// Marker opening the show.
const INTRO_MARKERS: &[&str] = &["Intro Music"];

/// Cue between segments of the discussion.
const TRANSITION_MARKERS: &[&str] = &["(Transition music)"];

/// Markers closing the show.
const CONCLUSION_MARKERS: &[&str] = &["Outro Music", "Thank you for listening"];

/// Section a single script line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Intro,
    Transition,
    MainDiscussion,
    Conclusion,
}

impl Section {
    /// Classifies one line. Precedence: Intro, Transition, Conclusion, then MainDiscussion.
    pub fn classify(line: &str) -> Section {
        let hit = |markers: &[&str]| markers.iter().any(|m| line.contains(m));
        if hit(INTRO_MARKERS) {
            Section::Intro
        } else if hit(TRANSITION_MARKERS) {
            Section::Transition
        } else if hit(CONCLUSION_MARKERS) {
            Section::Conclusion
        } else {
            Section::MainDiscussion
        }
    }
}

/// A generated script split into its three displayed buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionedScript {
    pub intro: Vec<String>,
    pub main_discussion: Vec<String>,
    pub conclusion: Vec<String>,
}

impl SectionedScript {
    /// Appends a line to the bucket for `section`. Transition cues stay inside the main discussion.
    pub fn push(&mut self, section: Section, line: String) {
        match section {
            Section::Intro => self.intro.push(line),
            Section::Transition | Section::MainDiscussion => self.main_discussion.push(line),
            Section::Conclusion => self.conclusion.push(line),
        }
    }

    pub fn len(&self) -> usize {
        self.intro.len() + self.main_discussion.len() + self.conclusion.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Classifies every line in order. Total: never fails, the empty input yields three empty buckets.
pub fn sectionize<I, S>(lines: I) -> SectionedScript
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut script = SectionedScript::default();
    for line in lines {
        let line = line.into();
        let section = Section::classify(&line);
        script.push(section, line);
    }
    script
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_empty_buckets() {
        let script = sectionize(Vec::<String>::new());
        assert!(script.intro.is_empty());
        assert!(script.main_discussion.is_empty());
        assert!(script.conclusion.is_empty());
        assert!(script.is_empty());
    }

    #[test]
    fn classifies_reference_script() {
        let script = sectionize([
            "Intro Music starts",
            "Hello **world**",
            "Outro Music plays",
            "Thank you for listening",
        ]);
        assert_eq!(script.intro, vec!["Intro Music starts"]);
        assert_eq!(script.main_discussion, vec!["Hello **world**"]);
        assert_eq!(
            script.conclusion,
            vec!["Outro Music plays", "Thank you for listening"]
        );
    }

    #[test]
    fn intro_wins_over_conclusion() {
        let line = "Intro Music fades. Thank you for listening last week!";
        assert_eq!(Section::classify(line), Section::Intro);
        let script = sectionize([line]);
        assert_eq!(script.intro.len(), 1);
        assert!(script.conclusion.is_empty());
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(Section::classify("intro music"), Section::MainDiscussion);
        assert_eq!(Section::classify("OUTRO MUSIC"), Section::MainDiscussion);
        assert_eq!(Section::classify("  Outro Music  "), Section::Conclusion);
    }

    #[test]
    fn transition_cues_stay_in_main_discussion() {
        assert_eq!(Section::classify("(Transition music)"), Section::Transition);
        let script = sectionize(["First topic", "(Transition music)", "Second topic"]);
        assert_eq!(
            script.main_discussion,
            vec!["First topic", "(Transition music)", "Second topic"]
        );
        assert_eq!(script.len(), 3);
    }

    #[test]
    fn every_line_lands_once_and_bucket_order_is_preserved() {
        let input = vec![
            "Host: welcome",
            "Intro Music swells",
            "Guest: thanks",
            "Outro Music",
            "(Transition music)",
            "Intro Music again",
            "Thank you for listening",
            "Host: one more thing",
        ];
        let script = sectionize(input.clone());
        assert_eq!(script.len(), input.len());

        for bucket in [&script.intro, &script.main_discussion, &script.conclusion] {
            let positions: Vec<usize> = bucket
                .iter()
                .map(|l| input.iter().position(|i| i == l).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
        assert_eq!(script.intro, vec!["Intro Music swells", "Intro Music again"]);
        assert_eq!(
            script.main_discussion,
            vec!["Host: welcome", "Guest: thanks", "(Transition music)", "Host: one more thing"]
        );
    }

    #[test]
    fn serializes_with_camel_case_buckets() {
        let script = sectionize(["a"]);
        let json = serde_json::to_value(&script).unwrap();
        assert_eq!(json["mainDiscussion"][0], "a");
        assert!(json["intro"].as_array().unwrap().is_empty());
    }
}
