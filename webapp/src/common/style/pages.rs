pub const PAGE_STYLES: &str = r#"
/* Shared page frame */
.page {
  min-height: 100vh;
  padding: 6rem var(--space-6) var(--space-12);
  animation: page-in 500ms ease-out;
}

@keyframes page-in {
  from { opacity: 0; transform: translateY(20px); }
  to { opacity: 1; transform: translateY(0); }
}

.page-title {
  font-family: var(--font-serif);
  font-size: 2.5rem;
  text-align: center;
  margin-bottom: var(--space-4);
}

.page-lead {
  text-align: center;
  color: var(--text-secondary);
  max-width: 40rem;
  margin: 0 auto var(--space-12);
}

.eyebrow {
  color: var(--primary);
  font-size: 0.75rem;
  font-weight: 700;
  letter-spacing: 0.15em;
  text-transform: uppercase;
}

/* Home */
.hero {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
  gap: var(--space-12);
  align-items: center;
  max-width: 72rem;
  margin: 0 auto;
}

.hero-title {
  font-family: var(--font-serif);
  font-size: 3.5rem;
  line-height: 1.1;
  margin: var(--space-4) 0;
}

.hero-description {
  font-size: 1.125rem;
  color: var(--text-secondary);
  margin-bottom: var(--space-8);
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-4);
}

.hero-image {
  width: 100%;
  aspect-ratio: 4 / 5;
  object-fit: cover;
  border-radius: 2rem;
  box-shadow: var(--shadow-lg);
}

.hero-monogram {
  display: flex;
  align-items: center;
  justify-content: center;
  aspect-ratio: 4 / 5;
  border-radius: 2rem;
  background-color: var(--primary);
  color: white;
  font-family: var(--font-serif);
  font-size: 6rem;
}

.highlights {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: var(--space-6);
  max-width: 72rem;
  margin: var(--space-16) auto 0;
}

.highlight-value {
  font-family: var(--font-serif);
  font-size: 2rem;
  color: var(--primary);
}

/* Timelines */
.timeline {
  max-width: 48rem;
  margin: 0 auto;
  border-left: 2px solid var(--border);
  padding-left: var(--space-8);
}

.timeline-item {
  position: relative;
  margin-bottom: var(--space-8);
}

.timeline-item::before {
  content: '';
  position: absolute;
  left: calc(-1 * var(--space-8) - 7px);
  top: 0.4rem;
  width: 12px;
  height: 12px;
  border-radius: var(--radius-full);
  background-color: var(--primary);
}

.timeline-year {
  font-size: 0.875rem;
  font-weight: 700;
  color: var(--primary);
}

.timeline-details {
  margin-top: var(--space-2);
  padding-left: var(--space-4);
  color: var(--text-secondary);
}

/* Testimonials */
.quote {
  font-family: var(--font-serif);
  font-size: 1.25rem;
  font-style: italic;
  text-align: center;
  max-width: 40rem;
  margin: var(--space-12) auto;
}

.testimonials {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
  gap: var(--space-6);
  max-width: 72rem;
  margin: 0 auto;
}

/* Gallery */
.filter-tabs {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: var(--space-2);
  margin-bottom: var(--space-8);
}

.filter-tab {
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-full);
  border: 1px solid var(--border);
  background-color: var(--surface);
  color: var(--text-secondary);
  cursor: pointer;
}

.filter-tab.active {
  background-color: var(--primary);
  border-color: var(--primary);
  color: white;
}

.gallery-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
  gap: var(--space-6);
  max-width: 72rem;
  margin: 0 auto;
}

.gallery-card {
  position: relative;
  overflow: hidden;
  padding: 0;
}

.gallery-card img,
.gallery-card video,
.gallery-card .media-missing {
  width: 100%;
  aspect-ratio: 4 / 3;
  object-fit: cover;
  display: block;
}

.media-missing {
  display: flex;
  align-items: center;
  justify-content: center;
  background-color: var(--stone-800);
  color: var(--stone-400);
}

.gallery-card-body {
  padding: var(--space-4);
}

.gallery-date {
  font-size: 0.75rem;
  color: var(--text-muted);
}

.gallery-remove {
  position: absolute;
  top: var(--space-2);
  right: var(--space-2);
}

.gallery-empty {
  text-align: center;
  color: var(--text-muted);
  padding: var(--space-12) 0;
}

.gallery-add {
  max-width: 72rem;
  margin: 0 auto var(--space-8);
  display: grid;
  gap: var(--space-4);
}

.reader-paragraph {
  margin-bottom: var(--space-4);
  line-height: 1.7;
}

/* Contact */
.contact-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
  gap: var(--space-8);
  max-width: 72rem;
  margin: 0 auto;
}

.contact-form {
  display: grid;
  gap: var(--space-4);
}

.contact-form .pair {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
  gap: var(--space-4);
}
"#;
