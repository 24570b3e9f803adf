pub const CSS_VARIABLES: &str = r#"
:root {
  /* Brand (overridden at runtime by the admin theme picker) */
  --primary: #0d9488;
  --accent: #f59e0b;

  /* Stone neutrals */
  --stone-50: #fafaf9;
  --stone-100: #f5f5f4;
  --stone-200: #e7e5e4;
  --stone-300: #d6d3d1;
  --stone-400: #a8a29e;
  --stone-500: #78716c;
  --stone-600: #57534e;
  --stone-700: #44403c;
  --stone-800: #292524;
  --stone-900: #1c1917;

  /* Light theme surfaces */
  --background: var(--stone-50);
  --surface: #ffffff;
  --border: var(--stone-200);
  --text-primary: var(--stone-900);
  --text-secondary: var(--stone-600);
  --text-muted: var(--stone-500);
  --danger: #dc2626;

  /* Spacing */
  --space-1: 0.25rem;
  --space-2: 0.5rem;
  --space-3: 0.75rem;
  --space-4: 1rem;
  --space-6: 1.5rem;
  --space-8: 2rem;
  --space-12: 3rem;
  --space-16: 4rem;

  /* Shape and motion */
  --radius-md: 0.5rem;
  --radius-lg: 0.75rem;
  --radius-xl: 1rem;
  --radius-full: 9999px;
  --shadow-sm: 0 1px 2px rgba(0, 0, 0, 0.05);
  --shadow-lg: 0 10px 25px rgba(0, 0, 0, 0.12);
  --transition: 300ms ease;

  --font-serif: Georgia, 'Times New Roman', serif;
  --font-sans: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
}

:root.dark {
  --background: #000000;
  --surface: var(--stone-900);
  --border: var(--stone-700);
  --text-primary: #ffffff;
  --text-secondary: var(--stone-300);
  --text-muted: var(--stone-400);
}
"#;
