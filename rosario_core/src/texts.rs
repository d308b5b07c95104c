//! Prayer texts, labels and mystery descriptions.
//!
//! The core state machine emits structural facts only; everything printable
//! lives here behind the [`TextProvider`] trait. The bundled English
//! [`PrayerBook`] is built once and cached; a TOML overlay file can replace
//! any subset of its entries for other languages, with every missing key
//! falling back to the bundled text.

use crate::{Error, MysterySet, PrayerKind, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Generic fallback returned whenever a lookup has no text.
const FALLBACK_TEXT: &str = "Prayer";

/// Resolves structural facts into display text.
///
/// All methods are pure lookups; none can fail. Implementations return a
/// fallback string instead of erroring when an entry is missing.
pub trait TextProvider {
    /// Body text for a step.
    fn prayer_body(
        &self,
        kind: PrayerKind,
        decade: Option<u32>,
        hail_mary: Option<u32>,
        set: MysterySet,
    ) -> String;

    /// Short label for a step, e.g. shown as a heading.
    fn prayer_label(&self, kind: PrayerKind, decade: Option<u32>, hail_mary: Option<u32>)
        -> String;

    /// Title of one mystery (0-based decade index).
    fn mystery_title(&self, set: MysterySet, decade: u32) -> String;

    /// Meditation text of one mystery (0-based decade index).
    fn mystery_description(&self, set: MysterySet, decade: u32) -> String;
}

// ============================================================================
// Prayer Book
// ============================================================================

/// Titles and meditations for one mystery set.
#[derive(Clone, Debug, Deserialize)]
pub struct MysteryTexts {
    pub titles: Vec<String>,
    pub descriptions: Vec<String>,
}

/// A complete set of prayer texts for one language.
#[derive(Clone, Debug)]
pub struct PrayerBook {
    bodies: HashMap<PrayerKind, String>,
    labels: HashMap<PrayerKind, String>,
    /// Announcement heading; placeholders `{n}`, `{set}`, `{title}`.
    announcement_format: String,
    /// Label for the announcement step; placeholder `{n}`.
    mystery_label_format: String,
    /// Label for a decade Hail Mary; placeholder `{n}`.
    hail_mary_label_format: String,
    completion_message: String,
    mysteries: HashMap<MysterySet, MysteryTexts>,
}

/// Cached bundled prayer book - built once and reused across all operations
static BUNDLED_BOOK: Lazy<PrayerBook> = Lazy::new(PrayerBook::bundled);

/// Get a reference to the cached bundled (English) prayer book.
pub fn bundled_book() -> &'static PrayerBook {
    &BUNDLED_BOOK
}

impl PrayerBook {
    /// Build the bundled English prayer book.
    ///
    /// **Note**: prefer [`bundled_book`] which returns a cached reference.
    /// This constructor is retained for testing and as the base for
    /// overlays.
    pub fn bundled() -> PrayerBook {
        let mut bodies = HashMap::new();
        let mut labels = HashMap::new();

        // ====================================================================
        // Prayer bodies
        // ====================================================================

        bodies.insert(
            PrayerKind::SignOfCross,
            "In the name of the Father, and of the Son, and of the Holy Spirit. Amen.".into(),
        );
        bodies.insert(
            PrayerKind::ApostlesCreed,
            "I believe in God, the Father almighty, Creator of heaven and earth, \
             and in Jesus Christ, his only Son, our Lord, who was conceived by \
             the Holy Spirit, born of the Virgin Mary, suffered under Pontius \
             Pilate, was crucified, died and was buried; he descended into hell; \
             on the third day he rose again from the dead; he ascended into \
             heaven, and is seated at the right hand of God the Father almighty; \
             from there he will come to judge the living and the dead. I believe \
             in the Holy Spirit, the holy catholic Church, the communion of \
             saints, the forgiveness of sins, the resurrection of the body, and \
             life everlasting. Amen."
                .into(),
        );
        bodies.insert(
            PrayerKind::OurFather,
            "Our Father, who art in heaven, hallowed be thy name; thy kingdom \
             come; thy will be done on earth as it is in heaven. Give us this \
             day our daily bread; and forgive us our trespasses as we forgive \
             those who trespass against us; and lead us not into temptation, \
             but deliver us from evil. Amen."
                .into(),
        );
        bodies.insert(
            PrayerKind::HailMary,
            "Hail Mary, full of grace, the Lord is with thee; blessed art thou \
             among women, and blessed is the fruit of thy womb, Jesus. Holy \
             Mary, Mother of God, pray for us sinners, now and at the hour of \
             our death. Amen."
                .into(),
        );
        bodies.insert(
            PrayerKind::HailMaryFaith,
            "For an increase of faith:\n\nHail Mary, full of grace, the Lord is \
             with thee; blessed art thou among women, and blessed is the fruit \
             of thy womb, Jesus. Holy Mary, Mother of God, pray for us sinners, \
             now and at the hour of our death. Amen."
                .into(),
        );
        bodies.insert(
            PrayerKind::HailMaryHope,
            "For an increase of hope:\n\nHail Mary, full of grace, the Lord is \
             with thee; blessed art thou among women, and blessed is the fruit \
             of thy womb, Jesus. Holy Mary, Mother of God, pray for us sinners, \
             now and at the hour of our death. Amen."
                .into(),
        );
        bodies.insert(
            PrayerKind::HailMaryCharity,
            "For an increase of charity:\n\nHail Mary, full of grace, the Lord \
             is with thee; blessed art thou among women, and blessed is the \
             fruit of thy womb, Jesus. Holy Mary, Mother of God, pray for us \
             sinners, now and at the hour of our death. Amen."
                .into(),
        );
        bodies.insert(
            PrayerKind::GloryBe,
            "Glory be to the Father, and to the Son, and to the Holy Spirit. As \
             it was in the beginning, is now, and ever shall be, world without \
             end. Amen."
                .into(),
        );
        bodies.insert(
            PrayerKind::Fatima,
            "O my Jesus, forgive us our sins, save us from the fires of hell; \
             lead all souls to heaven, especially those in most need of thy \
             mercy. Amen."
                .into(),
        );
        bodies.insert(
            PrayerKind::HailHolyQueen,
            "Hail, holy Queen, Mother of mercy, our life, our sweetness and our \
             hope. To thee do we cry, poor banished children of Eve. To thee do \
             we send up our sighs, mourning and weeping in this valley of \
             tears. Turn, then, most gracious advocate, thine eyes of mercy \
             toward us, and after this, our exile, show unto us the blessed \
             fruit of thy womb, Jesus. O clement, O loving, O sweet Virgin \
             Mary. Pray for us, O holy Mother of God, that we may be made \
             worthy of the promises of Christ."
                .into(),
        );
        bodies.insert(
            PrayerKind::ClosingPrayer,
            "Let us pray. O God, whose only-begotten Son, by his life, death \
             and resurrection, has purchased for us the rewards of eternal \
             life; grant, we beseech thee, that by meditating upon these \
             mysteries of the most holy Rosary of the Blessed Virgin Mary, we \
             may imitate what they contain and obtain what they promise, \
             through the same Christ our Lord. Amen."
                .into(),
        );

        // ====================================================================
        // Step labels
        // ====================================================================

        labels.insert(PrayerKind::SignOfCross, "Sign of the Cross".into());
        labels.insert(PrayerKind::ApostlesCreed, "The Apostles' Creed".into());
        labels.insert(PrayerKind::OurFather, "The Our Father".into());
        labels.insert(PrayerKind::HailMary, "Hail Mary".into());
        labels.insert(PrayerKind::HailMaryFaith, "Hail Mary (for Faith)".into());
        labels.insert(PrayerKind::HailMaryHope, "Hail Mary (for Hope)".into());
        labels.insert(PrayerKind::HailMaryCharity, "Hail Mary (for Charity)".into());
        labels.insert(PrayerKind::GloryBe, "Glory Be".into());
        labels.insert(PrayerKind::Fatima, "The Fatima Prayer".into());
        labels.insert(PrayerKind::HailHolyQueen, "Hail, Holy Queen".into());
        labels.insert(PrayerKind::ClosingPrayer, "Closing Prayer".into());

        // ====================================================================
        // Mysteries
        // ====================================================================

        let mut mysteries = HashMap::new();

        mysteries.insert(
            MysterySet::Joyful,
            MysteryTexts {
                titles: vec![
                    "The Annunciation".into(),
                    "The Visitation".into(),
                    "The Nativity".into(),
                    "The Presentation in the Temple".into(),
                    "The Finding in the Temple".into(),
                ],
                descriptions: vec![
                    "The Angel Gabriel announces to Mary that she is to be the \
                     Mother of God."
                        .into(),
                    "Mary visits her cousin Elizabeth, who greets her as the \
                     mother of her Lord."
                        .into(),
                    "Jesus is born in a stable in Bethlehem.".into(),
                    "Mary and Joseph present the child Jesus in the Temple.".into(),
                    "After three days of searching, Mary and Joseph find the \
                     young Jesus teaching in the Temple."
                        .into(),
                ],
            },
        );

        mysteries.insert(
            MysterySet::Sorrowful,
            MysteryTexts {
                titles: vec![
                    "The Agony in the Garden".into(),
                    "The Scourging at the Pillar".into(),
                    "The Crowning with Thorns".into(),
                    "The Carrying of the Cross".into(),
                    "The Crucifixion".into(),
                ],
                descriptions: vec![
                    "Jesus prays in the Garden of Gethsemane on the night of \
                     his betrayal."
                        .into(),
                    "Jesus is scourged at the pillar by order of Pilate.".into(),
                    "Soldiers crown Jesus with thorns and mock him as a king.".into(),
                    "Jesus carries his cross to Calvary.".into(),
                    "Jesus dies on the cross for the salvation of the world.".into(),
                ],
            },
        );

        mysteries.insert(
            MysterySet::Glorious,
            MysteryTexts {
                titles: vec![
                    "The Resurrection".into(),
                    "The Ascension".into(),
                    "The Descent of the Holy Spirit".into(),
                    "The Assumption".into(),
                    "The Coronation of Mary".into(),
                ],
                descriptions: vec![
                    "Jesus rises from the dead on the third day.".into(),
                    "Jesus ascends into heaven forty days after his \
                     resurrection."
                        .into(),
                    "The Holy Spirit descends upon Mary and the apostles at \
                     Pentecost."
                        .into(),
                    "Mary is assumed body and soul into heaven.".into(),
                    "Mary is crowned Queen of heaven and earth.".into(),
                ],
            },
        );

        mysteries.insert(
            MysterySet::Luminous,
            MysteryTexts {
                titles: vec![
                    "The Baptism in the Jordan".into(),
                    "The Wedding at Cana".into(),
                    "The Proclamation of the Kingdom".into(),
                    "The Transfiguration".into(),
                    "The Institution of the Eucharist".into(),
                ],
                descriptions: vec![
                    "Jesus is baptized by John in the Jordan and the Father's \
                     voice declares him the beloved Son."
                        .into(),
                    "At Mary's request, Jesus performs his first miracle at \
                     the wedding feast of Cana."
                        .into(),
                    "Jesus proclaims the Kingdom of God and calls all to \
                     conversion."
                        .into(),
                    "Jesus is transfigured in glory on Mount Tabor.".into(),
                    "Jesus institutes the Eucharist at the Last Supper.".into(),
                ],
            },
        );

        PrayerBook {
            bodies,
            labels,
            announcement_format: "The {n} {set} Mystery: {title}".into(),
            mystery_label_format: "Mystery {n}".into(),
            hail_mary_label_format: "Hail Mary ({n} of 10)".into(),
            completion_message: "You have completed the holy Rosary. God bless you.".into(),
            mysteries,
        }
    }

    /// Load a prayer book by overlaying a TOML translation file onto the
    /// bundled texts. Keys absent from the file keep the bundled English.
    pub fn load_from(path: &Path) -> Result<PrayerBook> {
        let contents = std::fs::read_to_string(path)?;
        let overlay: PrayerBookFile = toml::from_str(&contents)?;
        let mut book = Self::bundled();

        for (key, text) in overlay.prayers {
            match kind_from_key(&key) {
                Some(kind) => {
                    book.bodies.insert(kind, text);
                }
                None => {
                    return Err(Error::PrayerBook(format!("unknown prayer key '{}'", key)));
                }
            }
        }
        for (key, text) in overlay.labels {
            match kind_from_key(&key) {
                Some(kind) => {
                    book.labels.insert(kind, text);
                }
                None => {
                    return Err(Error::PrayerBook(format!("unknown label key '{}'", key)));
                }
            }
        }

        if let Some(fmt) = overlay.formats.mystery_announcement {
            book.announcement_format = fmt;
        }
        if let Some(fmt) = overlay.formats.mystery_label {
            book.mystery_label_format = fmt;
        }
        if let Some(fmt) = overlay.formats.hail_mary_label {
            book.hail_mary_label_format = fmt;
        }
        if let Some(msg) = overlay.formats.completion {
            book.completion_message = msg;
        }

        for (key, texts) in overlay.mysteries {
            match MysterySet::from_id(&key) {
                Some(set) => {
                    book.mysteries.insert(set, texts);
                }
                None => {
                    return Err(Error::PrayerBook(format!("unknown mystery set '{}'", key)));
                }
            }
        }

        let errors = book.validate();
        if !errors.is_empty() {
            return Err(Error::PrayerBook(format!(
                "invalid prayer book {:?}: {}",
                path,
                errors.join("; ")
            )));
        }

        tracing::info!("Loaded prayer book overlay from {:?}", path);
        Ok(book)
    }

    /// Message shown once the recitation has completed.
    pub fn completion_message(&self) -> &str {
        &self.completion_message
    }

    /// Validate the book for completeness.
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for kind in ALL_TEXT_KINDS {
            if !self.bodies.contains_key(&kind) {
                errors.push(format!("missing body for {:?}", kind));
            }
            if !self.labels.contains_key(&kind) {
                errors.push(format!("missing label for {:?}", kind));
            }
        }

        for set in MysterySet::ALL {
            match self.mysteries.get(&set) {
                Some(texts) => {
                    if texts.titles.len() != 5 {
                        errors.push(format!(
                            "{} mysteries need 5 titles, found {}",
                            set,
                            texts.titles.len()
                        ));
                    }
                    if texts.descriptions.len() != 5 {
                        errors.push(format!(
                            "{} mysteries need 5 descriptions, found {}",
                            set,
                            texts.descriptions.len()
                        ));
                    }
                }
                None => errors.push(format!("missing mysteries for {}", set)),
            }
        }

        if !self.announcement_format.contains("{title}") {
            errors.push("announcement format lacks a {title} placeholder".into());
        }

        errors
    }

    fn announcement_body(&self, decade: u32, set: MysterySet) -> String {
        let heading = self
            .announcement_format
            .replace("{n}", ordinal(decade + 1))
            .replace("{set}", set.name())
            .replace("{title}", &self.mystery_title(set, decade));
        let description = self.mystery_description(set, decade);
        if description == FALLBACK_TEXT {
            heading
        } else {
            format!("{}\n\n{}", heading, description)
        }
    }
}

impl TextProvider for PrayerBook {
    fn prayer_body(
        &self,
        kind: PrayerKind,
        decade: Option<u32>,
        _hail_mary: Option<u32>,
        set: MysterySet,
    ) -> String {
        match kind {
            PrayerKind::MysteryAnnouncement => self.announcement_body(decade.unwrap_or(0), set),
            _ => self
                .bodies
                .get(&kind)
                .cloned()
                .unwrap_or_else(|| FALLBACK_TEXT.to_string()),
        }
    }

    fn prayer_label(
        &self,
        kind: PrayerKind,
        decade: Option<u32>,
        hail_mary: Option<u32>,
    ) -> String {
        match (kind, hail_mary) {
            (PrayerKind::MysteryAnnouncement, _) => self
                .mystery_label_format
                .replace("{n}", &(decade.unwrap_or(0) + 1).to_string()),
            (PrayerKind::HailMary, Some(n)) => {
                self.hail_mary_label_format.replace("{n}", &n.to_string())
            }
            _ => self
                .labels
                .get(&kind)
                .cloned()
                .unwrap_or_else(|| FALLBACK_TEXT.to_string()),
        }
    }

    fn mystery_title(&self, set: MysterySet, decade: u32) -> String {
        self.mysteries
            .get(&set)
            .and_then(|texts| texts.titles.get(decade as usize))
            .cloned()
            .unwrap_or_else(|| FALLBACK_TEXT.to_string())
    }

    fn mystery_description(&self, set: MysterySet, decade: u32) -> String {
        self.mysteries
            .get(&set)
            .and_then(|texts| texts.descriptions.get(decade as usize))
            .cloned()
            .unwrap_or_else(|| FALLBACK_TEXT.to_string())
    }
}

// ============================================================================
// Overlay file format
// ============================================================================

#[derive(Debug, Default, Deserialize)]
struct PrayerBookFile {
    #[serde(default)]
    prayers: HashMap<String, String>,
    #[serde(default)]
    labels: HashMap<String, String>,
    #[serde(default)]
    formats: FormatOverrides,
    #[serde(default)]
    mysteries: HashMap<String, MysteryTexts>,
}

#[derive(Debug, Default, Deserialize)]
struct FormatOverrides {
    mystery_announcement: Option<String>,
    mystery_label: Option<String>,
    hail_mary_label: Option<String>,
    completion: Option<String>,
}

const ALL_TEXT_KINDS: [PrayerKind; 11] = [
    PrayerKind::SignOfCross,
    PrayerKind::ApostlesCreed,
    PrayerKind::OurFather,
    PrayerKind::HailMary,
    PrayerKind::HailMaryFaith,
    PrayerKind::HailMaryHope,
    PrayerKind::HailMaryCharity,
    PrayerKind::GloryBe,
    PrayerKind::Fatima,
    PrayerKind::HailHolyQueen,
    PrayerKind::ClosingPrayer,
];

fn kind_from_key(key: &str) -> Option<PrayerKind> {
    match key {
        "sign_of_cross" => Some(PrayerKind::SignOfCross),
        "apostles_creed" => Some(PrayerKind::ApostlesCreed),
        "our_father" => Some(PrayerKind::OurFather),
        "hail_mary" => Some(PrayerKind::HailMary),
        "hail_mary_faith" => Some(PrayerKind::HailMaryFaith),
        "hail_mary_hope" => Some(PrayerKind::HailMaryHope),
        "hail_mary_charity" => Some(PrayerKind::HailMaryCharity),
        "glory_be" => Some(PrayerKind::GloryBe),
        "fatima" => Some(PrayerKind::Fatima),
        "hail_holy_queen" => Some(PrayerKind::HailHolyQueen),
        "closing_prayer" => Some(PrayerKind::ClosingPrayer),
        _ => None,
    }
}

fn ordinal(n: u32) -> &'static str {
    match n {
        1 => "First",
        2 => "Second",
        3 => "Third",
        4 => "Fourth",
        _ => "Fifth",
    }
}
