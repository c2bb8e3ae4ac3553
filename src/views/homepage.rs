use maud::{html, Markup};

use crate::{models::TriviaBundle, names};

pub fn bundle_list(bundles: &[TriviaBundle], category: Option<&str>) -> Markup {
    html! {
        hgroup {
            h1 { "Trivia Bundles" }
            @if let Some(category) = category {
                p {
                    "Category: " strong { (category) }
                    " · "
                    a href=(names::HOME_URL) { "show all" }
                }
            }
        }
        @if bundles.is_empty() {
            p { "No trivia bundles yet." }
        } @else {
            table {
                thead {
                    tr {
                        th scope="col" { "#" }
                        th scope="col" { "Question" }
                        th scope="col" { "Category" }
                        th scope="col" { "Answer shown" }
                    }
                }
                tbody {
                    @for bundle in bundles {
                        (bundle_row(bundle))
                    }
                }
            }
        }
    }
}

fn bundle_row(bundle: &TriviaBundle) -> Markup {
    html! {
        tr {
            td {
                @if let Some(id) = bundle.id {
                    a href=(names::trivia_bundle_url(id)) { (id) }
                }
            }
            td { (bundle.question) }
            td {
                a href=(names::category_url(&bundle.category)) { (bundle.category) }
            }
            td { @if bundle.show_answer { "yes" } @else { "no" } }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle(id: i32, question: &str, category: &str) -> TriviaBundle {
        TriviaBundle {
            id: Some(id),
            question: question.into(),
            category: category.into(),
            answers: Vec::new(),
            show_answer: true,
        }
    }

    #[test]
    fn lists_each_bundle_with_links() {
        let html = bundle_list(
            &[bundle(1, "2+2?", "math"), bundle(2, "H2O is?", "science")],
            None,
        )
        .into_string();

        assert!(html.contains(r#"href="/trivia/1""#));
        assert!(html.contains(r#"href="/?category=science""#));
        assert!(html.contains("2+2?"));
        assert!(!html.contains("show all"));
    }

    #[test]
    fn escapes_question_markup() {
        let html = bundle_list(&[bundle(3, "<b>bold</b>?", "html")], None).into_string();
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;?"));
    }

    #[test]
    fn empty_filtered_list_offers_reset() {
        let html = bundle_list(&[], Some("history")).into_string();
        assert!(html.contains("No trivia bundles yet."));
        assert!(html.contains("history"));
        assert!(html.contains("show all"));
    }
}
