//! Global CSS for Essential UI.
//!
//! Defines the utility classes the components emit, plus the control and
//! page styles. Responsive `lg:` variants apply from 1024px.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --background: #ffffff;
  --foreground: #0f172a;
  --muted: #64748b;
  --border: #e2e8f0;
  --primary: #0f172a;
  --primary-foreground: #f8fafc;
  --danger: #ef4444;
  --ring: #94a3b8;

  --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;

  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--background);
  color: var(--foreground);
  line-height: 1.5;
  min-height: 100vh;
}

/* === Layout Utilities === */
.block { display: block; }
.flex { display: flex; }
.inline-flex { display: inline-flex; }
.hidden { display: none; }
.flex-row { flex-direction: row; }
.flex-col { flex-direction: column; }
.flex-wrap { flex-wrap: wrap; }
.items-center { align-items: center; }
.items-start { align-items: flex-start; }
.justify-center { justify-content: center; }
.justify-between { justify-content: space-between; }
.gap-2 { gap: 0.5rem; }
.gap-4 { gap: 1rem; }
.space-x-2 > * + * { margin-left: 0.5rem; }
.space-y-2 > * + * { margin-top: 0.5rem; }
.order-0 { order: 0; }
.order-1 { order: 1; }
.relative { position: relative; }
.absolute { position: absolute; }
.top-1\/2 { top: 50%; }
.right-0\.5 { right: 0.125rem; }
.right-2 { right: 0.5rem; }
.right-4 { right: 1rem; }
.-translate-y-1\/2 { transform: translateY(-50%); }
.w-full { width: 100%; }
.w-12 { width: 3rem; }
.w-5 { width: 1.25rem; }
.h-5 { height: 1.25rem; }
.h-8 { height: 2rem; }
.h-9 { height: 2.25rem; }
.px-3 { padding-left: 0.75rem; padding-right: 0.75rem; }
.px-4 { padding-left: 1rem; padding-right: 1rem; }
.py-2 { padding-top: 0.5rem; padding-bottom: 0.5rem; }
.pr-12 { padding-right: 3rem; }
.mt-1 { margin-top: 0.25rem; }
.ml-1 { margin-left: 0.25rem; }
.ml-6 { margin-left: 1.5rem; }
.rounded-md { border-radius: 0.375rem; }
.border { border: 1px solid var(--border); }

/* === Typography Utilities === */
.text-xs { font-size: 0.75rem; line-height: 1rem; }
.text-sm { font-size: 0.875rem; line-height: 1.25rem; }
.text-base { font-size: 1rem; line-height: 1.5rem; }
.text-md { font-size: 1.0625rem; line-height: 1.5rem; }
.text-lg { font-size: 1.125rem; line-height: 1.75rem; }
.text-xl { font-size: 1.25rem; line-height: 1.75rem; }
.text-3xl { font-size: 1.875rem; line-height: 2.25rem; }
.font-normal { font-weight: 400; }
.font-medium { font-weight: 500; }
.font-bold { font-weight: 700; }
.italic { font-style: italic; }
.tracking-tight { letter-spacing: -0.025em; }
.tracking-wide { letter-spacing: 0.025em; }
.leading-none { line-height: 1; }
.line-clamp-1 {
  overflow: hidden;
  display: -webkit-box;
  -webkit-box-orient: vertical;
  -webkit-line-clamp: 1;
}
.text-red-500 { color: var(--danger); }
.text-white { color: var(--primary-foreground); }
.text-muted { color: var(--muted); }

@media (min-width: 1024px) {
  .lg\:text-lg { font-size: 1.125rem; line-height: 1.75rem; }
  .lg\:text-2xl { font-size: 1.5rem; line-height: 2rem; }
  .lg\:text-4xl { font-size: 2.25rem; line-height: 2.5rem; }
  .lg\:text-5xl { font-size: 3rem; line-height: 1; }
}

/* === Animation === */
.animate-spin { animation: spin 1s linear infinite; }

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Controls === */
.btn {
  border: 1px solid transparent;
  cursor: pointer;
  transition: background var(--transition-fast), opacity var(--transition-fast);
}
.btn:disabled { opacity: 0.5; cursor: not-allowed; }
.bg-primary { background: var(--primary); }
.bg-transparent { background: transparent; }
.border.bg-transparent { border-color: var(--border); }

.input, .select {
  height: 2.25rem;
  padding: 0.25rem 0.75rem;
  border: 1px solid var(--border);
  border-radius: 0.375rem;
  font: inherit;
  font-size: 0.875rem;
  background: transparent;
}
.input:focus, .select:focus {
  outline: 2px solid var(--ring);
  outline-offset: 1px;
}
.input[aria-invalid="true"], .select[aria-invalid="true"] { border-color: var(--danger); }
.input:disabled, .select:disabled { opacity: 0.5; cursor: not-allowed; }

.checkbox, .radio {
  width: 1rem;
  height: 1rem;
  accent-color: var(--primary);
}

.switch {
  position: relative;
  width: 2.25rem;
  height: 1.25rem;
  border-radius: 9999px;
  border: none;
  background: var(--border);
  cursor: pointer;
  transition: background var(--transition-fast);
}
.switch-on { background: var(--primary); }
.switch:disabled { opacity: 0.5; cursor: not-allowed; }
.switch-thumb {
  position: absolute;
  top: 2px;
  left: 2px;
  width: 1rem;
  height: 1rem;
  border-radius: 9999px;
  background: var(--background);
  transition: transform var(--transition-fast);
}
.switch-on .switch-thumb { transform: translateX(1rem); }

/* === Pages === */
.page {
  max-width: 48rem;
  margin: 0 auto;
  padding: 2rem 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 2rem;
}
.page.auth { max-width: 28rem; }
.page-header { display: flex; flex-direction: column; gap: 0.5rem; }
.link { color: inherit; text-decoration: underline; text-underline-offset: 4px; }
.card {
  border: 1px solid var(--border);
  border-radius: 0.75rem;
  padding: 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}
.showcase { display: flex; flex-direction: column; gap: 0.75rem; }
.showcase-row { display: flex; align-items: baseline; gap: 1rem; }
.payload {
  font-family: ui-monospace, monospace;
  font-size: 0.75rem;
  background: #f8fafc;
  padding: 0.75rem;
  border-radius: 0.375rem;
  white-space: pre-wrap;
}
"#;

#[cfg(test)]
mod tests {
    use super::GLOBAL_STYLES;
    use essential_ui::{button_class, ButtonSize, ButtonVariant};

    fn defines(class: &str) -> bool {
        let selector = format!(".{}", class.replace('/', "\\/"));
        GLOBAL_STYLES.match_indices(&selector).any(|(idx, _)| {
            matches!(
                GLOBAL_STYLES[idx + selector.len()..].chars().next(),
                Some(' ' | ',' | '.' | ':' | '{')
            )
        })
    }

    #[test]
    fn every_button_class_is_styled() {
        for variant in [ButtonVariant::Primary, ButtonVariant::Outline, ButtonVariant::Ghost] {
            for size in [ButtonSize::Default, ButtonSize::Sm] {
                for class in button_class(variant, size, None).split_whitespace() {
                    assert!(defines(class), "no rule for {class}");
                }
            }
        }
    }

    #[test]
    fn only_rendered_button_styles_have_rules() {
        assert!(defines("bg-primary"));
        assert!(!defines("bg-red-500"));
        assert!(!defines("w-9"));
    }
}
