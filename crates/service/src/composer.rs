//! Follow-up email composition.
//!
//! Paragraphs are switched on by the categories of the requested services
//! (recognized and free-text). Inside the attachments and logistics
//! paragraphs each optional sentence keeps its slot, so a missing sentence
//! leaves a stray space rather than being compacted.

use chrono::NaiveDate;
use url::form_urlencoded;

use crate::categories::{Category, CategoryTable};
use crate::domain::Enquiry;

const FIRST_DANCE: &str = "Pick your favourite songs from there to help us shape the soundtrack to your night. We will learn your first dance and open to suggestions for other new songs, if it's something we think we can add to our set going forward.";
const SINGING_WAITER_MENU: &str = "Same goes for our singing waiter menu which is attached also.";
const CEILIDH_BAND_SIZE: &str = "For live Ceilidh with mash ups, a minimum of 5 piece band is required as the keys player will take the main melody and all packages include a Ceilidh caller with a demonstration of each dance. All band packages include a Ceilidh caller with a demonstration of each dance. Check our socials for clips of Ceilidh.";
const DRONE_AND_PA: &str = "Each Video package includes Drone free of charge (weather permitting), PA system with wireless mics for speeches & travel costs.";
const CLOSING: &str = concat!(
    "Also see the links below for some of our acoustic duets for during the Ceremony & Drinks Reception, an extended Highlight Reel and a clip from a Ceremony. \n",
    "\n",
    "Acoustic Duets - https://www.dropbox.com/scl/fi/mmcdfjzhdzioakwofbnyi/Acoustic-Duo-s.mp4?rlkey=ldg1fjergp2u84tk8atklnh22&st=u6f482m3&dl=0\n",
    "\n",
    "Extended Highlight Reel - https://www.dropbox.com/scl/fi/vt77c0vdk4zkgl3mfad1v/Highlight-Reel-extended.mp4?rlkey=35et1m27klfrdf4ken5p715l5&st=mgwn8mqi&dl=0\n",
    "\n",
    "Ceremony Clip - https://www.dropbox.com/scl/fi/4lalbnwfkbgppes1lprip/Ceremony.mp4?rlkey=1vg56ptlqz4b5s7epcdw9l4t4&st=0o26ayw7&dl=0\n",
    "\n",
    "We offer a 10% discount on Video/Photo when booked alongside Music.\n",
    "\n",
    "If you're curious about anything else let me know! \n",
    "\n",
    "Best wishes, \n",
    "Scott",
);

const PARAGRAPH_SEPARATOR: &str = "\n\n";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComposedEmail {
    pub subject: String,
    pub body: String,
    pub mailto: String,
}

/// `dd/MM/yyyy`
pub fn format_date_small(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub fn compose(enquiry: &Enquiry) -> ComposedEmail {
    compose_with(enquiry, &CategoryTable::default())
}

pub fn compose_with(enquiry: &Enquiry, table: &CategoryTable) -> ComposedEmail {
    let subject = subject(enquiry);
    let body = body(enquiry, table);
    let mailto = mailto(enquiry.email(), &subject, &body);
    ComposedEmail { subject, body, mailto }
}

/// Recognized services, a space, then the event date when there is one.
pub fn subject(enquiry: &Enquiry) -> String {
    let date = enquiry.event_date().map(format_date_small).unwrap_or_default();
    format!("{} {}", enquiry.services().join(", "), date)
}

pub fn body(enquiry: &Enquiry, table: &CategoryTable) -> String {
    let all: Vec<&str> = enquiry.all_services().collect();
    let has = |c: Category| table.has_category(&all, c);
    let venue = enquiry.venue_location().unwrap_or("");

    let mut paragraphs = vec![
        format!("Hi {} and {},", enquiry.first_name(), enquiry.partners_name()),
        format!(
            "Hope you enjoyed the rest of the showcase! We have your date available at the moment{}.",
            if venue.is_empty() { String::new() } else { format!(" for {}", venue) }
        ),
    ];

    let attachments = attachments(&has);
    if !attachments.is_empty() {
        paragraphs.push(
            [
                format!("I've attached the prices for {}.", attachments.join(", ")),
                sentence(has(Category::Band), FIRST_DANCE),
                sentence(has(Category::SingingWaiter), SINGING_WAITER_MENU),
            ]
            .join(" "),
        );
    }

    let logistics = [
        sentence(has(Category::Ceilidh) || has(Category::Band), CEILIDH_BAND_SIZE),
        if has(Category::Music) { travel_sentence(venue) } else { String::new() },
    ];
    if logistics.iter().any(|s| !s.is_empty()) {
        paragraphs.push(logistics.join(" "));
    }

    if has(Category::VideoOrPhoto) {
        paragraphs.push(DRONE_AND_PA.to_string());
    }
    paragraphs.push(CLOSING.to_string());
    paragraphs.join(PARAGRAPH_SEPARATOR)
}

fn sentence(include: bool, text: &str) -> String {
    if include { text.to_string() } else { String::new() }
}

fn attachments(has: &impl Fn(Category) -> bool) -> Vec<&'static str> {
    let mut out = Vec::new();
    if has(Category::VideoOrPhoto) {
        out.push("Video/Photo");
    }
    if has(Category::Music) {
        out.push("Music and our extended setlist");
    }
    out
}

// A known venue gets the shorter wording; distance is only mentioned when
// the venue is blank. Kept as the business wrote it.
fn travel_sentence(venue: &str) -> String {
    let tail = if venue.trim().is_empty() { "musicians and distance." } else { "musicians." };
    format!("Travel will vary depending on the number of {}", tail)
}

/// `mailto:<email>?subject=..&body=..`, form-urlencoded.
pub fn mailto(email: &str, subject: &str, body: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("subject", subject)
        .append_pair("body", body)
        .finish();
    format!("mailto:{}?{}", email, query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EnquiryInput;

    fn enquiry(services: &[&str], other: &[&str], venue: Option<&str>, date: Option<NaiveDate>) -> Enquiry {
        Enquiry::new(EnquiryInput {
            first_name: "Garry".into(),
            last_name: "Hall".into(),
            partners_name: "ted".into(),
            email: "garrymhall@gmail.com".into(),
            event_date: date,
            venue_location: venue.map(String::from),
            services: services.iter().map(|s| s.to_string()).collect(),
            other_services: other.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        })
        .unwrap()
    }

    fn paragraphs(body: &str) -> Vec<&str> {
        // the closing paragraph has its own blank lines; split off the head only
        let head = body.split(CLOSING).next().unwrap();
        head.split(PARAGRAPH_SEPARATOR).filter(|p| !p.is_empty()).collect()
    }

    #[test]
    fn bare_enquiry_has_greeting_availability_and_closing_only() {
        let e = enquiry(&[], &[], None, None);
        let body = compose(&e).body;
        let expected = format!(
            "Hi Garry and ted,\n\nHope you enjoyed the rest of the showcase! We have your date available at the moment.\n\n{}",
            CLOSING
        );
        assert_eq!(body, expected);
    }

    #[test]
    fn venue_clause_only_when_venue_set() {
        let with = compose(&enquiry(&[], &[], Some("Perthshire"), None)).body;
        assert!(with.contains("available at the moment for Perthshire."));
        let empty = compose(&enquiry(&[], &[], Some(""), None)).body;
        assert!(empty.contains("available at the moment."));
    }

    #[test]
    fn subject_joins_services_and_date() {
        let e = enquiry(&["Live Band (3/5/7 piece)", "Wedding Film"], &["abc"], None, NaiveDate::from_ymd_opt(2024, 12, 26));
        assert_eq!(subject(&e), "Live Band (3/5/7 piece), Wedding Film 26/12/2024");
        let no_date = enquiry(&["DJ"], &[], None, None);
        assert_eq!(subject(&no_date), "DJ ");
    }

    #[test]
    fn band_and_film_enquiry() {
        let e = enquiry(&["Live Band (3/5/7 piece)", "Wedding Film"], &["abc"], Some("Perthshire"), None);
        let body = compose(&e).body;
        let p = paragraphs(&body);
        assert_eq!(p.len(), 5);
        assert_eq!(
            p[2],
            format!("I've attached the prices for Video/Photo, Music and our extended setlist. {} ", FIRST_DANCE)
        );
        assert_eq!(
            p[3],
            format!("{} Travel will vary depending on the number of musicians.", CEILIDH_BAND_SIZE)
        );
        assert_eq!(p[4], DRONE_AND_PA);
    }

    #[test]
    fn travel_mentions_distance_only_without_venue() {
        let no_venue = compose(&enquiry(&["DJ"], &[], None, None)).body;
        assert!(no_venue.contains("number of musicians and distance."));
        let blank = compose(&enquiry(&["DJ"], &[], Some("   "), None)).body;
        assert!(blank.contains("for    ."));
        assert!(blank.contains("number of musicians and distance."));
        let venue = compose(&enquiry(&["DJ"], &[], Some("Perthshire"), None)).body;
        assert!(venue.contains("number of musicians."));
        assert!(!venue.contains("and distance"));
    }

    #[test]
    fn music_without_band_keeps_leading_space() {
        let body = compose(&enquiry(&["Bagpipes"], &[], None, None)).body;
        let p = paragraphs(&body);
        assert_eq!(p[2], "I've attached the prices for Music and our extended setlist.  ");
        assert_eq!(p[3], " Travel will vary depending on the number of musicians and distance.");
        assert!(!body.contains(DRONE_AND_PA));
    }

    #[test]
    fn singing_waiter_sentence() {
        let body = compose(&enquiry(&["Singing Waiting"], &[], None, None)).body;
        assert!(body.contains(&format!("setlist.  {}", SINGING_WAITER_MENU)));
    }

    #[test]
    fn ceilidh_triggers_band_size_note() {
        let body = compose(&enquiry(&["Ceilidh"], &[], None, None)).body;
        assert!(body.contains(CEILIDH_BAND_SIZE));
        assert!(!body.contains(FIRST_DANCE));
    }

    #[test]
    fn photo_only_has_drone_but_no_logistics() {
        let body = compose(&enquiry(&["Photography"], &[], None, None)).body;
        let p = paragraphs(&body);
        assert_eq!(p.len(), 4);
        assert_eq!(p[2], "I've attached the prices for Video/Photo.  ");
        assert_eq!(p[3], DRONE_AND_PA);
    }

    #[test]
    fn other_services_count_towards_categories() {
        let body = compose(&enquiry(&[], &["DJ"], None, None)).body;
        assert!(body.contains("Music and our extended setlist"));
    }

    #[test]
    fn overridden_table_changes_gating() {
        let table = CategoryTable::default().with_triggers(Category::VideoOrPhoto, ["Drone Footage"]);
        let e = enquiry(&[], &["Drone Footage"], None, None);
        assert!(compose_with(&e, &table).body.contains(DRONE_AND_PA));
        assert!(!compose(&e).body.contains(DRONE_AND_PA));
    }

    #[test]
    fn mailto_is_form_urlencoded() {
        let link = mailto("a@b.com", "DJ 26/12/2024", "Hi A & B,\n\nx=y");
        assert_eq!(link, "mailto:a@b.com?subject=DJ+26%2F12%2F2024&body=Hi+A+%26+B%2C%0A%0Ax%3Dy");
    }

    #[test]
    fn composed_link_targets_enquiry_email() {
        let e = enquiry(&["DJ"], &[], None, None);
        let c = compose(&e);
        assert!(c.mailto.starts_with("mailto:garrymhall@gmail.com?subject=DJ+&body=Hi+Garry+and+ted%2C"));
    }
}
