use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #1f2937; background: #f9fafb; }
header { display: flex; align-items: center; gap: 1rem; padding: 0.75rem 1.5rem; background: #fff; box-shadow: 0 1px 3px rgba(0,0,0,.1); }
header nav ul { display: flex; gap: 1rem; list-style: none; margin: 0; padding: 0; }
main.container { max-width: 960px; margin: 2rem auto; padding: 0 1rem; }
.card { background: #fff; border-radius: 8px; padding: 1.25rem 1.5rem; margin-bottom: 1.5rem; box-shadow: 0 1px 2px rgba(0,0,0,.06); }
.card h2 { margin-top: 0; }
form.stack { display: grid; gap: .5rem; max-width: 420px; }
form.stack input, form.stack textarea { padding: .5rem; font-size: 1rem; }
button.primary { background: #524ed2; color: #fff; border: none; border-radius: 4px; padding: .6rem 1rem; font-size: 1rem; cursor: pointer; }
dl.fields { display: grid; grid-template-columns: max-content 1fr; gap: .35rem 1rem; }
dl.fields dt { font-weight: 600; }
table.data { width: 100%; border-collapse: collapse; }
table.data th, table.data td { padding: 6px 8px; border-bottom: 1px solid #e5e7eb; text-align: left; }
.disclaimer { background: #fef3c7; border-left: 4px solid #f59e0b; padding: .75rem 1rem; }
.status { font-weight: 600; }
.chart { display: flex; gap: 2rem; align-items: center; flex-wrap: wrap; }
.swatch { display: inline-block; width: 12px; height: 12px; margin-right: 6px; border-radius: 2px; }
pre.json { max-height: 480px; overflow: auto; background: #111827; color: #e5e7eb; padding: 1rem; border-radius: 6px; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Property Explorer" }
                style { (PreEscaped(STYLE)) }
            }
            body {
              header {
                  svg
                      xmlns="http://www.w3.org/2000/svg"
                      width="24"
                      height="24"
                      viewBox="0 0 24 24"
                      fill="none"
                      stroke="#524ed2"
                      stroke-width="2"
                      stroke-linecap="round"
                      stroke-linejoin="round"
                  {
                      path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                      path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                      path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                      path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                  }
                  h3 { "Property Explorer" }
                  nav {
                      ul {
                          li { a href="/" { "Home" } }
                          li { a href="/compare" { "Compare Classifiers" } }
                      }
                  }
              }
                (content)
            }
        }
    }
}
