use super::*;

#[test]
fn list_items_become_bullets_with_strong_spans() {
    let blocks = flatten(
        r#"<ul class="space-y-4">
            <li class="flex"><strong class="block">Focus</strong> <span>Ship small things</span></li>
            <li>Second</li>
        </ul>"#,
    );

    assert_eq!(
        blocks,
        vec![
            Block::Bullet(vec![Span::strong("Focus"), Span::plain(" Ship small things")]),
            Block::Bullet(vec![Span::plain("Second")]),
        ]
    );
}

#[test]
fn table_rows_collect_cells() {
    let blocks = flatten(
        "<table><thead><tr><th>Strategic Focus</th><th>Top Skill</th></tr></thead>\
         <tbody><tr><td>R&amp;D</td><td> Hiring </td></tr></tbody></table>",
    );

    assert_eq!(
        blocks,
        vec![
            Block::TableRow(vec!["Strategic Focus".to_string(), "Top Skill".to_string()]),
            Block::TableRow(vec!["R&D".to_string(), "Hiring".to_string()]),
        ]
    );
}

#[test]
fn comments_are_dropped_and_headings_detected() {
    let blocks = flatten(
        "<!-- 1. Overview --><h3 class=\"text-sm\">EXECUTIVE SUMMARY</h3><p>Line&nbsp;one &#65;&#x42;</p>",
    );

    assert_eq!(
        blocks,
        vec![
            Block::Heading(vec![Span::plain("EXECUTIVE SUMMARY")]),
            Block::Paragraph(vec![Span::plain("Line one AB")]),
        ]
    );
}

#[test]
fn bare_text_is_a_single_paragraph() {
    assert_eq!(
        flatten("  plain   text\n here "),
        vec![Block::Paragraph(vec![Span::plain("plain text here")])]
    );
    assert!(flatten("").is_empty());
    assert!(flatten("<div>   </div>").is_empty());
}

#[test]
fn unknown_entities_survive_verbatim() {
    assert_eq!(
        flatten("<p>a &bogus; b</p>"),
        vec![Block::Paragraph(vec![Span::plain("a &bogus; b")])]
    );
}

#[test]
fn plain_text_rendering_marks_bullets() {
    let text = to_plain_text("<p>Intro</p><ul><li>One</li><li>Two</li></ul>");
    assert_eq!(text, "Intro\n  • One\n  • Two");
}

#[test]
fn lesson_items_stay_one_bullet_without_the_marker_glyph() {
    let blocks = flatten(
        r#"<ul class="space-y-4">
        <li class="flex items-start">
          <span class="mr-3 text-cyan-500 mt-1">✦</span>
          <div>
            <strong class="text-slate-900 block mb-1 font-bold">Focus</strong>
            <span class="text-slate-600 text-sm leading-relaxed">Do one thing.</span>
          </div>
        </li>
        <li><span>✦</span><div><strong>Speed</strong><span>Ship weekly.</span></div></li>
      </ul>"#,
    );

    assert_eq!(
        blocks,
        vec![
            Block::Bullet(vec![Span::strong("Focus"), Span::plain(" Do one thing.")]),
            Block::Bullet(vec![Span::strong("Speed"), Span::plain(" Ship weekly.")]),
        ]
    );
}

#[test]
fn journey_milestones_drop_the_arrow_and_keep_year_spacing() {
    let blocks = flatten(
        r#"<ul class="space-y-3">
             <li class="flex items-start text-sm text-slate-600">
               <span class="mr-3 text-cyan-500 text-[10px] mt-1">➤</span>
               <span><strong class="text-slate-800">2020</strong>: Launched X</span>
             </li>
             <li><span>➤</span><span><strong>2021</strong>: Grew Y</span></li>
          </ul>"#,
    );

    assert_eq!(
        blocks,
        vec![
            Block::Bullet(vec![Span::strong("2020"), Span::plain(": Launched X")]),
            Block::Bullet(vec![Span::strong("2021"), Span::plain(": Grew Y")]),
        ]
    );
}

#[test]
fn adjacent_inline_elements_are_separated() {
    assert_eq!(
        flatten("<p><span>Alpha</span><span>Beta</span>, done</p>"),
        vec![Block::Paragraph(vec![Span::plain("Alpha Beta, done")])]
    );
    assert_eq!(
        flatten("<li>- plain dash item</li><li>$5 budget</li>"),
        vec![
            Block::Bullet(vec![Span::plain("plain dash item")]),
            Block::Bullet(vec![Span::plain("$5 budget")]),
        ]
    );
}
