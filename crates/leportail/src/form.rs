//! Static profile form page
//!
//! One self-contained document: the form posts to the JSON API from inline
//! script and renders the ranked list, the phased timeline, and the raw
//! JSON export client-side. Page layout is a display concern; everything
//! contractual lives in the API.

/// The profile form page served at `GET /`
pub const FORM_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>LeParcours - Learning Path Recommender</title>
<style>
  body { font-family: system-ui, sans-serif; max-width: 880px; margin: 2rem auto; padding: 0 1rem; color: #222; }
  h1 { margin-bottom: 0.25rem; }
  .subtitle { color: #666; margin-top: 0; }
  form { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; margin: 1.5rem 0; }
  label { display: block; font-weight: 600; margin-bottom: 0.25rem; }
  input, select, textarea { width: 100%; padding: 0.4rem; box-sizing: border-box; }
  textarea { resize: vertical; min-height: 3.5rem; }
  .full { grid-column: 1 / -1; }
  button { grid-column: 1 / -1; padding: 0.6rem; font-size: 1rem; cursor: pointer; }
  .error { color: #b00020; font-weight: 600; }
  .rec { border: 1px solid #ddd; border-radius: 6px; padding: 0.75rem 1rem; margin: 0.5rem 0; }
  .rec h3 { margin: 0 0 0.25rem; }
  .score { float: right; font-weight: 700; }
  .timeline { display: grid; grid-template-columns: 1fr 1fr 1fr; gap: 1rem; }
  .timeline h3 { border-bottom: 2px solid #ddd; padding-bottom: 0.25rem; }
  pre { background: #f6f6f6; padding: 1rem; overflow-x: auto; border-radius: 6px; }
</style>
</head>
<body>
<h1>LeParcours</h1>
<p class="subtitle">Personalized learning path recommender: courses matched to your education, skills, and career goals.</p>

<form id="profile-form">
  <div>
    <label for="education">Education Level</label>
    <select id="education">
      <option>High School</option>
      <option>Associate Degree</option>
      <option selected>Bachelors Degree</option>
      <option>Masters Degree</option>
      <option>PhD</option>
      <option>Other</option>
    </select>
  </div>
  <div>
    <label for="major">Major / Field of Study</label>
    <input id="major" value="Computer Science">
  </div>
  <div class="full">
    <label for="technical-skills">Technical Skills (comma-separated)</label>
    <textarea id="technical-skills">python, excel, sql</textarea>
  </div>
  <div class="full">
    <label for="soft-skills">Soft Skills (comma-separated)</label>
    <textarea id="soft-skills">communication, problem solving</textarea>
  </div>
  <div>
    <label for="target-domain">Target Career Domain (optional)</label>
    <select id="target-domain">
      <option value=""></option>
      <option>Data Science</option>
      <option>Web Development</option>
      <option>Cloud Computing</option>
      <option>Digital Marketing</option>
      <option>Business Analytics</option>
      <option>DevOps</option>
      <option>UI/UX Design</option>
      <option>Cybersecurity</option>
      <option>Other</option>
    </select>
  </div>
  <div>
    <label for="study-duration">Preferred Study Duration (optional)</label>
    <select id="study-duration">
      <option value=""></option>
      <option>1-3 months</option>
      <option>3-6 months</option>
      <option>6-12 months</option>
      <option>12+ months</option>
    </select>
  </div>
  <div>
    <label for="experience-years">Years of Experience (optional)</label>
    <input id="experience-years" type="number" min="0" value="0">
  </div>
  <button type="submit">Get Recommendations</button>
</form>

<p id="error" class="error" hidden></p>

<section id="results" hidden>
  <h2>Recommended Courses</h2>
  <div id="recommendations"></div>

  <h2>Suggested Learning Timeline</h2>
  <div class="timeline">
    <div><h3>Short-Term (1-3 months)</h3><ul id="short-term"></ul></div>
    <div><h3>Medium-Term (3-6 months)</h3><ul id="medium-term"></ul></div>
    <div><h3>Long-Term (6-12 months)</h3><ul id="long-term"></ul></div>
  </div>

  <h2>JSON Output</h2>
  <pre id="json-output"></pre>
</section>

<script>
const form = document.getElementById('profile-form');
const errorEl = document.getElementById('error');
const resultsEl = document.getElementById('results');

form.addEventListener('submit', async (event) => {
  event.preventDefault();
  errorEl.hidden = true;
  resultsEl.hidden = true;

  const submission = {
    education: document.getElementById('education').value,
    major: document.getElementById('major').value,
    technical_skills: document.getElementById('technical-skills').value,
    soft_skills: document.getElementById('soft-skills').value,
    target_domain: document.getElementById('target-domain').value || null,
    study_duration: document.getElementById('study-duration').value || null,
    experience_years: Number(document.getElementById('experience-years').value) || 0,
  };

  const response = await fetch('/api/recommendations', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify(submission),
  });
  const body = await response.json();

  if (!response.ok) {
    errorEl.textContent = body.error || 'Request failed';
    errorEl.hidden = false;
    return;
  }

  const recsEl = document.getElementById('recommendations');
  recsEl.replaceChildren();
  body.user_recommendations.forEach((rec, i) => {
    const div = document.createElement('div');
    div.className = 'rec';
    const h3 = document.createElement('h3');
    h3.textContent = (i + 1) + '. ' + rec.course_title + ' (' + rec.provider + ')';
    const score = document.createElement('span');
    score.className = 'score';
    score.textContent = rec.match_score + '% match';
    const why = document.createElement('p');
    why.textContent = rec.justification + ' Leads to: ' + rec.career_path + '. Timeline: ' + rec.timeline + '.';
    div.append(score, h3, why);
    recsEl.append(div);
  });

  for (const [bucket, id] of [['short_term', 'short-term'], ['medium_term', 'medium-term'], ['long_term', 'long-term']]) {
    const list = document.getElementById(id);
    list.replaceChildren();
    body.learning_timeline[bucket].forEach((entry) => {
      const li = document.createElement('li');
      li.textContent = entry.course_title + ' - ' + entry.reason;
      list.append(li);
    });
  }

  document.getElementById('json-output').textContent = JSON.stringify(body, null, 2);
  resultsEl.hidden = false;
});
</script>
</body>
</html>
"##;
