use constcat::concat;

mod components;
mod pages;
mod variables;

use components::BASE_COMPONENTS;
use pages::PAGE_STYLES;
use variables::CSS_VARIABLES;

pub const SITE_STYLES: &str = concat!(
    r#"
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: var(--font-sans);
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.5;
  overflow-x: hidden;
  transition: background-color 500ms ease, color 500ms ease;
}

a {
  color: var(--primary);
  text-decoration: none;
}

::selection {
  background-color: var(--primary);
  color: white;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    r#"
/* Chrome: navbar, footer, backdrop, admin */
.app-header {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 40;
  padding: var(--space-6) 0;
  transition: all var(--transition);
}

.app-header.scrolled {
  padding: var(--space-4) 0;
  background-color: var(--surface);
  box-shadow: var(--shadow-sm);
}

.nav-container {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0 var(--space-6);
}

.logo {
  display: flex;
  align-items: center;
  gap: var(--space-3);
  cursor: pointer;
  font-family: var(--font-serif);
  font-weight: 700;
  font-size: 1.5rem;
  color: var(--primary);
}

.nav-links {
  display: flex;
  align-items: center;
  gap: var(--space-6);
}

.nav-link {
  background: none;
  border: none;
  cursor: pointer;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.nav-link:hover,
.nav-link.active {
  color: var(--primary);
}

.nav-link.active {
  font-weight: 700;
}

.nav-toggle {
  display: none;
}

.mobile-menu {
  display: none;
}

@media (max-width: 768px) {
  .nav-links .nav-link {
    display: none;
  }

  .nav-toggle {
    display: inline-flex;
  }

  .mobile-menu {
    display: flex;
    flex-direction: column;
    background-color: var(--surface);
    padding: var(--space-6);
    text-align: center;
  }

  .mobile-menu .nav-link {
    padding: var(--space-4) 0;
    font-size: 1.125rem;
    border-bottom: 1px solid var(--border);
  }
}

.backdrop {
  position: fixed;
  inset: 0;
  z-index: 0;
  pointer-events: none;
  opacity: 0.15;
  transition: background 500ms ease;
}

main {
  position: relative;
  z-index: 10;
  flex-grow: 1;
}

.app-root {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
}

.site-footer {
  background-color: var(--stone-900);
  color: var(--stone-400);
  padding: var(--space-12) var(--space-6);
  text-align: center;
  position: relative;
  z-index: 10;
}

.footer-name {
  font-family: var(--font-serif);
  font-size: 1.5rem;
  color: white;
  margin-bottom: var(--space-4);
}

.footer-links,
.social-links {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: var(--space-4);
  margin-bottom: var(--space-6);
}

.footer-links button {
  background: none;
  border: none;
  color: inherit;
  cursor: pointer;
}

.social-link {
  padding: var(--space-2) var(--space-3);
  border-radius: var(--radius-full);
  background-color: var(--stone-800);
  color: var(--stone-400);
  font-size: 0.875rem;
}

.social-link:hover {
  background-color: var(--primary);
  color: white;
}

.admin-dock {
  position: fixed;
  bottom: var(--space-4);
  left: var(--space-4);
  z-index: 50;
}

.admin-lock {
  opacity: 0.5;
}

.admin-lock:hover {
  opacity: 1;
}

.admin-panel {
  width: 20rem;
  max-height: 80vh;
  overflow-y: auto;
  display: grid;
  gap: var(--space-4);
}

.swatches {
  display: flex;
  gap: var(--space-2);
}

.swatch {
  width: 2rem;
  height: 2rem;
  border-radius: var(--radius-full);
  border: 2px solid white;
  cursor: pointer;
}

.swatch.active {
  outline: 2px solid var(--text-primary);
}
"#,
    PAGE_STYLES,
);
