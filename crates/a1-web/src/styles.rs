//! Static assets compiled into the binary: the site stylesheet and the
//! image placeholder.

/// Served at `/assets/site.css`.
pub const SITE_CSS: &str = r#"
:root {
    --teal: #0d9488;
    --teal-dark: #0f766e;
    --ink: #0f172a;
    --muted: #475569;
    --soft: #f1f5f9;
    --line: #e2e8f0;
    --emerald: #059669;
    --blue: #2563eb;
    --purple: #7c3aed;
    --orange: #ea580c;
    --rose: #e11d48;
    --gray: #64748b;
    --radius: 14px;
}

* { box-sizing: border-box; }
body { margin: 0; font-family: Inter, system-ui, -apple-system, sans-serif; color: var(--ink); background: #fff; line-height: 1.6; }
a { color: inherit; text-decoration: none; }
img { max-width: 100%; display: block; }
.container { max-width: 1200px; margin: 0 auto; padding: 0 24px; }
.section { padding: 80px 0; }
.section-alt { background: var(--soft); }
.section-head { text-align: center; max-width: 720px; margin: 0 auto 48px; }
.section-head h2 { font-size: 2.25rem; margin: 12px 0; }
.section-head p { color: var(--muted); }
.badge { display: inline-flex; align-items: center; gap: 6px; padding: 4px 14px; border-radius: 999px; background: #ccfbf1; color: var(--teal-dark); font-size: .85rem; font-weight: 600; }
.highlight { color: var(--teal); }
.muted { color: var(--muted); }
.icon { width: 20px; height: 20px; flex-shrink: 0; }
.icon-lg { width: 32px; height: 32px; }
.grid { display: grid; gap: 24px; }
.grid-2 { grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); }
.grid-3 { grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); }
.grid-4 { grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); }
.card { background: #fff; border: 1px solid var(--line); border-radius: var(--radius); padding: 24px; }
.btn { display: inline-flex; align-items: center; gap: 8px; padding: 12px 24px; border-radius: 10px; font-weight: 600; border: 2px solid var(--teal); background: var(--teal); color: #fff; cursor: pointer; }
.btn-outline { background: transparent; color: var(--teal); }
.btn-row { display: flex; flex-wrap: wrap; gap: 12px; margin-top: 24px; }

/* chrome */
.site-nav { position: sticky; top: 0; z-index: 10; background: rgba(255, 255, 255, .95); border-bottom: 1px solid var(--line); }
.site-nav .container { display: flex; align-items: center; justify-content: space-between; height: 72px; }
.brand { font-size: 1.4rem; font-weight: 800; color: var(--teal-dark); }
.menu { display: flex; gap: 8px; list-style: none; margin: 0; padding: 0; }
.menu a, .menu summary { display: block; padding: 8px 14px; border-radius: 8px; cursor: pointer; }
.menu a:hover, .menu summary:hover { background: var(--soft); }
.menu details { position: relative; }
.submenu { position: absolute; top: 100%; left: 0; min-width: 220px; list-style: none; margin: 4px 0 0; padding: 8px; background: #fff; border: 1px solid var(--line); border-radius: 10px; }
.site-footer { background: var(--ink); color: #cbd5e1; padding: 64px 0 32px; }
.site-footer h4 { color: #fff; margin-top: 0; }
.site-footer ul { list-style: none; padding: 0; margin: 0; }
.site-footer li { margin: 6px 0; }
.site-footer a:hover { color: #5eead4; }
.footer-bottom { border-top: 1px solid #334155; margin-top: 40px; padding-top: 24px; font-size: .9rem; }
.socials { display: flex; gap: 12px; margin-top: 16px; }

/* sections */
.hero { padding: 96px 0; background: linear-gradient(135deg, #f0fdfa, #fff 60%); }
.hero .grid { align-items: center; }
.hero h1 { font-size: 3rem; line-height: 1.15; margin: 16px 0; }
.hero h1 span { display: block; }
.points { list-style: none; padding: 0; }
.points li { display: flex; gap: 10px; align-items: center; margin: 8px 0; }
.stat-value { font-size: 2.5rem; font-weight: 800; color: var(--teal); margin: 0; }
.timeline { border-left: 3px solid var(--teal); padding-left: 24px; }
.timeline-item { margin-bottom: 32px; }
.timeline-year { font-weight: 800; color: var(--teal); }
.avatar { width: 56px; height: 56px; border-radius: 50%; object-fit: cover; }
.initials { width: 56px; height: 56px; border-radius: 50%; background: var(--teal); color: #fff; display: flex; align-items: center; justify-content: center; font-weight: 700; }
.leader img { width: 100%; aspect-ratio: 1; object-fit: cover; border-radius: var(--radius); }
.value-emerald { border-top: 4px solid var(--emerald); }
.value-blue { border-top: 4px solid var(--blue); }
.value-purple { border-top: 4px solid var(--purple); }
.value-orange { border-top: 4px solid var(--orange); }
.value-gray { border-top: 4px solid var(--gray); }
.tone-emerald { color: var(--emerald); }
.tone-blue { color: var(--blue); }
.tone-purple { color: var(--purple); }
.tone-orange { color: var(--orange); }
.tone-teal { color: var(--teal); }
.tone-rose { color: var(--rose); }
.slider { position: relative; overflow: hidden; border-radius: var(--radius); }
.slide { display: none; }
.slide.active { display: block; }
.slide img { width: 100%; max-height: 560px; object-fit: cover; }
.marquee { overflow: hidden; }
.marquee-track { display: flex; gap: 48px; width: max-content; animation: marquee 40s linear infinite; }
.client { display: flex; align-items: center; gap: 10px; font-weight: 600; color: var(--muted); }
.client img { height: 40px; width: auto; }
@keyframes marquee { from { transform: translateX(0); } to { transform: translateX(-50%); } }
.faq details { border: 1px solid var(--line); border-radius: 10px; margin-bottom: 12px; padding: 16px 20px; }
.faq summary { display: flex; align-items: center; gap: 12px; font-weight: 600; cursor: pointer; }
.content-block .grid { align-items: center; }
.content-block img { border-radius: var(--radius); }
.content-block.reverse .media { order: 2; }
.bullets { list-style: none; padding: 0; }
.bullets li { display: flex; gap: 10px; margin: 8px 0; }
.service-block .grid { align-items: center; }
.service-block.reverse .media { order: 2; }

/* jobs */
.job-card h3 { margin: 8px 0; }
.job-meta { display: flex; flex-wrap: wrap; gap: 12px; color: var(--muted); font-size: .9rem; }
.job-meta span { display: inline-flex; align-items: center; gap: 4px; }
.skills { display: flex; flex-wrap: wrap; gap: 6px; margin-top: 12px; }
.skill { background: var(--soft); border-radius: 6px; padding: 2px 8px; font-size: .8rem; }
.featured { border-color: var(--teal); }
.pagination { display: flex; justify-content: center; gap: 8px; margin-top: 40px; }
.pagination a, .pagination span { padding: 8px 14px; border: 1px solid var(--line); border-radius: 8px; }
.pagination .current { background: var(--teal); color: #fff; border-color: var(--teal); }

/* blogs */
.blog-card img { width: 100%; height: 200px; object-fit: cover; border-radius: 10px; }
.filters { display: flex; flex-wrap: wrap; gap: 12px; justify-content: center; margin-bottom: 32px; }
.filters input { padding: 12px 16px; border: 1px solid var(--line); border-radius: 10px; min-width: 280px; }
.chip { padding: 6px 14px; border-radius: 999px; border: 1px solid var(--line); }
.chip.active { background: var(--teal); color: #fff; border-color: var(--teal); }
.article { max-width: 820px; margin: 0 auto; }
.article img { width: 100%; border-radius: var(--radius); margin: 24px 0; }

/* forms */
.form { display: grid; gap: 16px; }
.form label { display: grid; gap: 6px; font-weight: 600; font-size: .9rem; }
.form input, .form textarea, .form select { padding: 12px 14px; border: 1px solid var(--line); border-radius: 10px; font: inherit; }
.banner { padding: 14px 18px; border-radius: 10px; margin-bottom: 20px; }
.banner-success { background: #dcfce7; color: #166534; }
.banner-error { background: #fee2e2; color: #991b1b; }

.not-found { text-align: center; padding: 120px 0; }
.not-found h1 { font-size: 4rem; margin: 0; color: var(--teal); }

@media (max-width: 768px) {
    .menu { display: none; }
    .hero h1 { font-size: 2.2rem; }
    .content-block.reverse .media, .service-block.reverse .media { order: 0; }
}
"#;

/// Served at `/assets/placeholder.svg`.
pub const PLACEHOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="800" height="500" viewBox="0 0 800 500"><rect width="800" height="500" fill="#e2e8f0"/><path d="M330 300l50-60 40 45 30-35 70 80H280z" fill="#94a3b8"/><circle cx="350" cy="200" r="22" fill="#94a3b8"/></svg>"##;
